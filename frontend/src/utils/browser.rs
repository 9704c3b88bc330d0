//! Hard navigation, routed through one seam so host tests can observe it.

#[cfg(target_arch = "wasm32")]
pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static NAVIGATIONS: std::cell::RefCell<Vec<String>> = std::cell::RefCell::new(Vec::new());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(path: &str) {
    NAVIGATIONS.with(|log| log.borrow_mut().push(path.to_string()));
}

/// Drains the navigations recorded on this thread.
#[cfg(not(target_arch = "wasm32"))]
pub fn take_navigations() -> Vec<String> {
    NAVIGATIONS.with(|log| std::mem::take(&mut *log.borrow_mut()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn navigations_are_recorded_and_drained() {
        let _ = take_navigations();
        navigate("/acme");
        navigate("/");
        assert_eq!(take_navigations(), vec!["/acme".to_string(), "/".to_string()]);
        assert!(take_navigations().is_empty());
    }
}
