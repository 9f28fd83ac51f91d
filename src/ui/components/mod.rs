//! Reusable UI components, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`ReleaseStageBadge`]: Connector release-stage chip or GA icon
//! - [`Tooltip`]: Hover / focus popup around a trigger element
//! - [`GaIcon`]: "Generally available" SVG mark

mod icons;
mod release_stage_badge;
mod tooltip;

pub use icons::GaIcon;
pub use release_stage_badge::{
    BadgeContent, BadgeNode, BadgeOptions, ChipSize, ReleaseStageBadge, release_stage_badge,
};
pub use tooltip::{TOOLTIP_CSS, Tooltip, TooltipCursor};
