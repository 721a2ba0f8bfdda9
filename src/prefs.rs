use parallax_core::Preferences;
use web_sys as web;

#[inline]
pub fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load(storage: Option<&web::Storage>) -> Preferences {
    match storage {
        Some(s) => Preferences::load(|key| s.get_item(key).ok().flatten()),
        None => Preferences::default(),
    }
}

pub fn save(storage: Option<&web::Storage>, prefs: &Preferences) {
    let Some(s) = storage else {
        return;
    };
    for (key, value) in prefs.entries() {
        if let Err(e) = s.set_item(key, &value) {
            log::warn!("[prefs] could not store {}: {:?}", key, e);
        }
    }
}
