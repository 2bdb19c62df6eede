//! Fade mount/unmount transition.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay before flipping opacity on entry, so the browser paints the
/// initial value and the transition plays.
const ENTER_DELAY_MS: u32 = 20;

/// Fades content in when `shown` becomes true and keeps it mounted through
/// the fade-out before unmounting.
///
/// `children` receives the interpolated inline style on every render.
/// Showing again during a fade-out cancels the pending unmount.
#[component]
pub fn Fade<C, IV>(
    /// Whether the content should be shown
    #[prop(into)]
    shown: Signal<bool>,
    /// Transition duration in milliseconds
    #[prop(default = 200)]
    duration_ms: u32,
    /// CSS timing function
    #[prop(default = "ease")]
    timing: &'static str,
    /// Render function receiving the current transition style
    children: C,
) -> impl IntoView
where
    C: Fn(String) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let (rendered, set_rendered) = signal(shown.get_untracked());
    let (opaque, set_opaque) = signal(false);
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |prev: Option<bool>| {
        let shown_now = shown.get();
        if prev == Some(shown_now) {
            return shown_now;
        }
        if shown_now {
            set_rendered.set(true);
            // replacing the stored handle cancels any pending unmount
            pending.set_value(Some(Timeout::new(ENTER_DELAY_MS, move || {
                set_opaque.set(true)
            })));
        } else if prev.is_some() {
            set_opaque.set(false);
            pending.set_value(Some(Timeout::new(duration_ms, move || {
                set_rendered.set(false)
            })));
        }
        shown_now
    });

    let style = Memo::new(move |_| {
        format!(
            "opacity: {}; transition: opacity {}ms {};",
            if opaque.get() { 1 } else { 0 },
            duration_ms,
            timing
        )
    });

    move || rendered.get().then(|| children(style.get()))
}
