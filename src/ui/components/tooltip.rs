//! Hover / focus tooltip wrapper.

use leptos::prelude::*;

/// Stylesheet the tooltip markup relies on. Pages embedding [`Tooltip`] include
/// it once, e.g. inside a `<style>` element.
pub const TOOLTIP_CSS: &str = ".tooltip { position: relative; display: inline-flex; align-items: center; }
.tooltip-popup { visibility: hidden; pointer-events: none; position: absolute; bottom: 100%;
    left: 50%; transform: translateX(-50%); margin-bottom: 0.5rem; width: max-content;
    max-width: 20rem; padding: 0.5rem 0.75rem; border-radius: 0.5rem;
    background: rgba(0, 0, 0, 0.9); color: #fff; font-size: 0.75rem; z-index: 10; }
.tooltip:hover > .tooltip-popup, .tooltip:focus > .tooltip-popup { visibility: visible; }
";

/// Cursor shown over a tooltip's trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TooltipCursor {
    /// Clickable trigger.
    #[default]
    Pointer,
    /// More information is available.
    Help,
    /// Trigger is disabled.
    NotAllowed,
}

impl TooltipCursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Help => "help",
            Self::NotAllowed => "not-allowed",
        }
    }
}

/// Renders `control` inline and reveals `children` on hover or keyboard focus.
///
/// # Example
///
/// ```rust,ignore
/// let control = view! { <span>"?"</span> }.into_any();
/// view! {
///     <Tooltip control=control cursor=TooltipCursor::Help>
///         "Explanation"
///     </Tooltip>
/// }
/// ```
#[component]
pub fn Tooltip(
    /// Element that triggers the popup.
    control: AnyView,
    /// Cursor over the trigger.
    #[prop(default = TooltipCursor::Pointer)]
    cursor: TooltipCursor,
    /// Popup content.
    children: Children,
) -> impl IntoView {
    let style = format!("cursor: {};", cursor.css());

    view! {
        <span class="tooltip" style=style tabindex="0">
            {control}
            <span role="tooltip" class="tooltip-popup">
                {children()}
            </span>
        </span>
    }
}
