use crate::constants::{MOBILE_QUERY, REDUCED_MOTION_QUERY};
use crate::core::DeviceProfile;
use crate::dom::{self, EventListener};
use web_sys as web;

/// Current device profile from the gating media queries.
pub fn device_profile() -> DeviceProfile {
    match (
        dom::media_query(MOBILE_QUERY),
        dom::media_query(REDUCED_MOTION_QUERY),
    ) {
        (Some(mobile), Some(motion)) => DeviceProfile {
            mobile: mobile.matches(),
            reduced_motion: motion.matches(),
        },
        _ => {
            let width = dom::viewport_size().map(|s| s.x as f64).unwrap_or(0.0);
            DeviceProfile::from_viewport(width, dom::media_matches(REDUCED_MOTION_QUERY))
        }
    }
}

/// Call `on_change` with the fresh profile whenever either query flips.
pub fn wire_media_changes(
    on_change: impl Fn(DeviceProfile) + Clone + 'static,
) -> Vec<EventListener> {
    [MOBILE_QUERY, REDUCED_MOTION_QUERY]
        .into_iter()
        .filter_map(|q| {
            let mql = dom::media_query(q)?;
            let cb = on_change.clone();
            EventListener::new(&mql, "change", move |_: web::MediaQueryListEvent| {
                cb(device_profile());
            })
            .map_err(|e| log::warn!("[media] cannot watch {}: {:?}", q, e))
            .ok()
        })
        .collect()
}
