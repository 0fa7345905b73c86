//! Handset breakpoint subscription.
//!
//! Wraps a `matchMedia` listener on the handset media query. Subscribers
//! get an initial emission with the current match state and one emission
//! per change; dropping the returned guard detaches the listener. Requires
//! a browser environment; elsewhere the subscription is inert.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Media query classifying the viewport as a handset: narrow portrait
/// phones and short landscape phones.
pub const HANDSET_QUERY: &str = "(max-width: 599.98px) and (orientation: portrait), \
                                 (max-width: 959.98px) and (orientation: landscape)";

/// Live breakpoint subscription. Dropping it removes the listener.
#[cfg(feature = "hydrate")]
pub struct BreakpointSubscription {
    inner: Option<(
        web_sys::MediaQueryList,
        Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
    )>,
}

/// Inert placeholder outside the browser.
#[cfg(not(feature = "hydrate"))]
pub struct BreakpointSubscription;

#[cfg(feature = "hydrate")]
impl Drop for BreakpointSubscription {
    fn drop(&mut self) {
        if let Some((list, _handler)) = self.inner.take() {
            list.set_onchange(None);
        }
    }
}

/// Subscribe `on_emit` to the handset query.
///
/// `on_emit` is called immediately with the current match state, then once
/// per change event, with `true` meaning the viewport is handset-sized.
pub fn subscribe(on_emit: impl Fn(bool) + 'static) -> BreakpointSubscription {
    #[cfg(feature = "hydrate")]
    {
        let list = web_sys::window()
            .and_then(|window| window.match_media(HANDSET_QUERY).ok().flatten());
        let Some(list) = list else {
            return BreakpointSubscription { inner: None };
        };

        on_emit(list.matches());

        let handler = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| {
                on_emit(event.matches());
            },
        );
        list.set_onchange(Some(handler.as_ref().unchecked_ref()));

        BreakpointSubscription {
            inner: Some((list, handler)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_emit;
        BreakpointSubscription
    }
}
