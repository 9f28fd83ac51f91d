//! Connector release-stage badge.
//!
//! [`release_stage_badge`] decides what to show and returns a plain
//! [`BadgeNode`]; [`ReleaseStageBadge`] renders that node with Leptos.

use leptos::prelude::*;
use tracing::debug;

use super::icons::GaIcon;
use super::tooltip::{Tooltip, TooltipCursor};
use crate::connector::ReleaseStage;
use crate::i18n::{
    SharedTranslator, Translator, release_stage_description_key, release_stage_label_key,
};
use crate::theme::{SharedTheme, ThemeProvider};

/// Display flags for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeOptions {
    /// Compact chip. Default `false`.
    pub small: bool,
    /// Wrap the badge in a description tooltip. Default `true`.
    pub tooltip: bool,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            small: false,
            tooltip: true,
        }
    }
}

/// Chip font size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChipSize {
    /// 10px text.
    #[default]
    Regular,
    /// 8px text.
    Small,
}

impl ChipSize {
    /// Size for the `small` flag.
    #[must_use]
    pub fn from_small(small: bool) -> Self {
        if small { Self::Small } else { Self::Regular }
    }

    /// CSS `font-size` value.
    #[must_use]
    pub fn font_size(self) -> &'static str {
        match self {
            Self::Regular => "10px",
            Self::Small => "8px",
        }
    }
}

/// The badge itself, before any tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeContent {
    /// Generally-available icon.
    GaIcon,
    /// Text chip.
    Chip {
        label: String,
        size: ChipSize,
        background: String,
        color: String,
    },
}

impl BadgeContent {
    /// Inline style of a chip; `None` for the icon.
    pub fn style(&self) -> Option<String> {
        match self {
            Self::GaIcon => None,
            Self::Chip {
                size,
                background,
                color,
                ..
            } => Some(format!(
                "display: inline-block; padding: 2px 6px; background: {background}; \
                 border-radius: 25px; text-transform: uppercase; font-size: {}; \
                 line-height: initial; color: {color};",
                size.font_size()
            )),
        }
    }

    fn render(self) -> AnyView {
        let style = self.style();
        match self {
            Self::GaIcon => view! { <GaIcon/> }.into_any(),
            Self::Chip { label, .. } => view! {
                <span class="release-stage" style=style>
                    {label}
                </span>
            }
            .into_any(),
        }
    }
}

/// Renderable result of [`release_stage_badge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeNode {
    /// Badge without a tooltip.
    Plain(BadgeContent),
    /// Badge used as a tooltip trigger.
    WithTooltip {
        control: BadgeContent,
        cursor: TooltipCursor,
        description: String,
    },
}

impl BadgeNode {
    /// The badge, with or without tooltip.
    pub fn content(&self) -> &BadgeContent {
        match self {
            Self::Plain(content) | Self::WithTooltip { control: content, .. } => content,
        }
    }

    /// Tooltip text, if wrapped.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::WithTooltip { description, .. } => Some(description),
        }
    }

    /// Render to a Leptos view.
    pub fn render(self) -> AnyView {
        match self {
            Self::Plain(content) => content.render(),
            Self::WithTooltip {
                control,
                cursor,
                description,
            } => {
                let control = control.render();
                view! {
                    <Tooltip control=control cursor=cursor>
                        {description}
                    </Tooltip>
                }
                .into_any()
            }
        }
    }
}

/// Decide what to display for `stage`.
///
/// Returns `None` when there is no stage, the identifier is empty, or the
/// stage is `custom`. The
/// generally-available stage shows an icon; every other stage shows a localized
/// chip.
pub fn release_stage_badge(
    stage: Option<&ReleaseStage>,
    options: BadgeOptions,
    i18n: &dyn Translator,
    theme: &dyn ThemeProvider,
) -> Option<BadgeNode> {
    let stage = match stage {
        None | Some(ReleaseStage::Custom) => {
            debug!(
                name: "badge.render.skipped",
                stage = ?stage.map(ReleaseStage::as_str),
                "No release stage badge to show"
            );
            return None;
        }
        Some(ReleaseStage::Other(id)) if id.is_empty() => {
            debug!(
                name: "badge.render.skipped",
                stage = "",
                "Empty release stage, nothing to show"
            );
            return None;
        }
        Some(stage) => stage,
    };

    let badge = match stage {
        ReleaseStage::GenerallyAvailable => BadgeContent::GaIcon,
        _ => BadgeContent::Chip {
            label: i18n.resolve(&release_stage_label_key(stage)),
            size: ChipSize::from_small(options.small),
            background: theme.grey_color_20().to_string(),
            color: theme.text_color().to_string(),
        },
    };

    if !options.tooltip {
        return Some(BadgeNode::Plain(badge));
    }

    Some(BadgeNode::WithTooltip {
        control: badge,
        cursor: TooltipCursor::Help,
        description: i18n.resolve(&release_stage_description_key(stage)),
    })
}

/// Release-stage badge for a connector.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ReleaseStageBadge i18n=i18n.clone() theme=theme.clone() stage=ReleaseStage::Beta small=true/>
/// }
/// ```
#[component]
pub fn ReleaseStageBadge(
    /// Message lookup.
    i18n: SharedTranslator,
    /// Theme tokens for the chip.
    theme: SharedTheme,
    /// Stage to display; nothing is rendered without one.
    #[prop(optional, into)]
    stage: Option<ReleaseStage>,
    /// Compact chip.
    #[prop(optional)]
    small: bool,
    /// Show the description tooltip.
    #[prop(default = true)]
    tooltip: bool,
) -> impl IntoView {
    let options = BadgeOptions { small, tooltip };
    release_stage_badge(stage.as_ref(), options, i18n.as_ref(), theme.as_ref())
        .map(BadgeNode::render)
}
