//! In-memory, per-client session attributes.
//!
//! Sessions idle for longer than the configured `session_ttl` are evicted
//! whenever a session is created or written. A session cookie is honored only
//! when it names a live session issued by this store; anything else gets a
//! fresh id.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use rand::distributions::{Alphanumeric, DistString};
use rocket::fairing::AdHoc;
use rocket::http::{Cookie, SameSite, Status};
use rocket::request::{self, FromRequest, Request};
use rocket::outcome::Outcome;

use crate::config::AppConfig;

const SESSION_ID_LEN: usize = 32;

#[derive(Debug)]
struct Entry {
    attributes: HashMap<String, String>,
    last_seen: Instant,
}

impl Entry {
    fn new(now: Instant) -> Self {
        Entry { attributes: HashMap::new(), last_seen: now }
    }
}

/// Session attributes keyed by session id. Lives in managed state.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Entry>>,
    ttl: Duration,
}

/// Whether `id` has the shape of an id this store hands out.
fn is_session_id(id: &str) -> bool {
    id.len() == SESSION_ID_LEN && id.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        SessionStore { sessions: RwLock::new(HashMap::new()), ttl }
    }

    fn evict_expired(&self, sessions: &mut HashMap<String, Entry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) < self.ttl);
        if sessions.len() < before {
            log::debug!("evicted {} expired session(s)", before - sessions.len());
        }
    }

    /// Starts a new, empty session and returns its id.
    fn create(&self, now: Instant) -> String {
        let mut sessions = self.sessions.write();
        self.evict_expired(&mut sessions, now);

        let mut id = Alphanumeric.sample_string(&mut rand::thread_rng(), SESSION_ID_LEN);
        while sessions.contains_key(&id) {
            id = Alphanumeric.sample_string(&mut rand::thread_rng(), SESSION_ID_LEN);
        }

        sessions.insert(id.clone(), Entry::new(now));
        id
    }

    /// Marks the session `id` as seen at `now`. Returns `false` if `id` is
    /// malformed, unknown or expired.
    fn touch(&self, id: &str, now: Instant) -> bool {
        if !is_session_id(id) {
            return false;
        }

        let mut sessions = self.sessions.write();
        match sessions.get_mut(id) {
            Some(entry) if now.saturating_duration_since(entry.last_seen) < self.ttl => {
                entry.last_seen = now;
                true
            }
            _ => false,
        }
    }

    fn set(&self, id: &str, key: &str, value: &str, now: Instant) {
        let mut sessions = self.sessions.write();
        self.evict_expired(&mut sessions, now);

        let entry = sessions.entry(id.to_string()).or_insert_with(|| Entry::new(now));
        entry.last_seen = now;
        entry.attributes.insert(key.to_string(), value.to_string());
    }

    #[cfg(test)]
    pub fn get(&self, id: &str, key: &str) -> Option<String> {
        self.sessions.read().get(id)?.attributes.get(key).cloned()
    }

    #[cfg(test)]
    pub fn contains(&self, id: &str) -> bool {
        self.sessions.read().contains_key(id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }
}

/// Manages a [`SessionStore`] whose expiry comes from [`AppConfig`]. Must be
/// attached after `AdHoc::config::<AppConfig>()`.
pub fn fairing() -> AdHoc {
    AdHoc::on_ignite("Sessions", |rocket| async move {
        let ttl = rocket.state::<AppConfig>()
            .map(|config| config.session_ttl)
            .unwrap_or_else(|| AppConfig::default().session_ttl);

        log::info!("sessions expire after {}s idle", ttl);
        rocket.manage(SessionStore::new(Duration::from_secs(ttl)))
    })
}

/// Request guard for the requesting client's session.
///
/// Reads the session id from the configured cookie. When the client has none,
/// or the cookie doesn't name a live session, a fresh id is generated and sent
/// back as an `HttpOnly` cookie.
pub struct Session<'r> {
    id: String,
    store: &'r SessionStore,
}

impl Session<'_> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Stores `value` under `key` for this session.
    pub fn set(&self, key: &str, value: &str) {
        self.store.set(&self.id, key, value, Instant::now());
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session<'r> {
    type Error = &'static str;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let rocket = req.rocket();
        let (Some(store), Some(config)) = (rocket.state::<SessionStore>(), rocket.state::<AppConfig>()) else {
            return Outcome::Error((Status::InternalServerError, "session store is not managed"));
        };

        let now = Instant::now();
        let cookies = req.cookies();
        let existing = cookies.get(&config.session_cookie)
            .map(|cookie| cookie.value())
            .filter(|id| store.touch(id, now))
            .map(String::from);

        let id = match existing {
            Some(id) => id,
            None => {
                let id = store.create(now);
                log::debug!("new session {}", id);
                cookies.add(Cookie::build((config.session_cookie.clone(), id.clone()))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax));

                id
            }
        };

        Outcome::Success(Session { id, store })
    }
}
