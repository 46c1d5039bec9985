//! Application model: `App` and the bar callbacks it hands to the
//! playback module.
//!
//! `App` owns the route, every page's view state and the one
//! `PlaybackSession`, which survives navigation.

use std::collections::{BTreeSet, VecDeque};

use rand::Rng;

use crate::catalog::{self, CatalogItem};
use crate::pages::{
    CardIntent, DetailPage, HomePage, LibraryPage, LibraryTab, LoginError, LoginForm, LoginOutcome,
    NavTarget, PageView, RowIntent, Route, SearchPage,
};
use crate::playback::{
    self, BarCallbacks, ClockTick, OptionalControls, PlaybackCmd, PlaybackSession, PositionSource,
    RepeatMode, Track,
};

/// Skip previous restarts the current track when more than this many
/// seconds have played.
pub const RESTART_THRESHOLD_SECS: u64 = 3;

/// Optional bar controls the app implements.
pub const BAR_CONTROLS: OptionalControls = OptionalControls {
    repeat: true,
    shuffle: true,
    like: true,
};

/// The main application model.
pub struct App<S: PositionSource> {
    route: Route,
    back_stack: Vec<Route>,

    pub login: LoginForm,
    pub home: HomePage,
    pub search: SearchPage,
    pub library: LibraryPage,
    pub detail: DetailPage,

    pub session: PlaybackSession<S>,

    liked: BTreeSet<String>,
    queue: VecDeque<Track>,
    status: Option<String>,
    pub should_quit: bool,
}

impl<S: PositionSource> App<S> {
    /// Create an `App` starting at `start` with the given session.
    pub fn new(session: PlaybackSession<S>, start: Route) -> Self {
        let detail = match start {
            Route::Detail { kind, id } => DetailPage::open(kind, id),
            _ => DetailPage::default(),
        };
        Self {
            route: start,
            back_stack: Vec::new(),
            login: LoginForm::new(),
            home: HomePage::new(),
            search: SearchPage::new(),
            library: LibraryPage::new(),
            detail,
            session,
            liked: BTreeSet::new(),
            queue: VecDeque::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    #[cfg(test)]
    pub fn liked(&self) -> &BTreeSet<String> {
        &self.liked
    }

    pub fn queue(&self) -> &VecDeque<Track> {
        &self.queue
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// The page behind the current route, if it is a browsable page.
    pub fn active_page(&self) -> Option<&dyn PageView> {
        match self.route {
            Route::Login => None,
            Route::Home => Some(&self.home),
            Route::Search => Some(&self.search),
            Route::Library => Some(&self.library),
            Route::Detail { .. } => Some(&self.detail),
        }
    }

    pub fn active_page_mut(&mut self) -> Option<&mut dyn PageView> {
        match self.route {
            Route::Login => None,
            Route::Home => Some(&mut self.home),
            Route::Search => Some(&mut self.search),
            Route::Library => Some(&mut self.library),
            Route::Detail { .. } => Some(&mut self.detail),
        }
    }

    /// Go to `route`. Detail pages stack so `back` can return from them;
    /// top-level pages reset the stack.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::info!(from = ?self.route, to = ?route, "navigate");
        match route {
            Route::Detail { kind, id } => {
                self.back_stack.push(self.route);
                self.detail = DetailPage::open(kind, id);
            }
            _ => self.back_stack.clear(),
        }
        self.route = route;
    }

    /// Return to the previous route. Returns false at the bottom of the stack.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.back_stack.pop() else {
            return false;
        };
        if let Route::Detail { kind, id } = previous {
            self.detail = DetailPage::open(kind, id);
        }
        tracing::debug!(from = ?self.route, to = ?previous, "back");
        self.route = previous;
        true
    }

    /// Follow a sidebar entry.
    pub fn go_to(&mut self, target: NavTarget) {
        match target {
            NavTarget::Home => self.navigate(Route::Home),
            NavTarget::Search => self.navigate(Route::Search),
            NavTarget::Library => self.navigate(Route::Library),
            NavTarget::LikedSongs => {
                self.library.set_tab(LibraryTab::LikedSongs);
                self.navigate(Route::Library);
            }
            NavTarget::CreatePlaylist => {
                tracing::debug!("create playlist selected");
                self.set_status("Creating playlists is not available yet.");
            }
        }
    }

    /// Submit the login form; a successful login goes home.
    pub fn submit_login(&mut self) -> Result<LoginOutcome, LoginError> {
        let outcome = self.login.submit()?;
        match outcome {
            LoginOutcome::LoggedIn => self.navigate(Route::Home),
            LoginOutcome::Registered => self.set_status("Registration successful, please log in."),
        }
        Ok(outcome)
    }

    /// Route a song-row intent. Returns false when the id is unknown to the
    /// active page.
    pub fn handle_row_intent(&mut self, intent: RowIntent) -> bool {
        match intent {
            RowIntent::PlayPause(id) => {
                let Some(track) = self.song_track(id) else {
                    tracing::debug!(id, "row play ignored: unknown song");
                    return false;
                };
                tracing::info!(id, "row play/pause");
                self.session.select_track(track);
                true
            }
            RowIntent::Like(id) => {
                self.toggle_like(id);
                true
            }
            RowIntent::AddToQueue(id) => {
                let Some(track) = self.song_track(id) else {
                    return false;
                };
                self.set_status(format!("Added \"{}\" to the queue", track.title));
                tracing::info!(id, queued = self.queue.len() + 1, "queued");
                self.queue.push_back(track);
                true
            }
        }
    }

    /// Route a content-card intent.
    pub fn handle_card_intent(&mut self, intent: CardIntent) -> bool {
        self.handle_card_intent_with(intent, &mut rand::rng())
    }

    pub fn handle_card_intent_with<R: Rng + ?Sized>(&mut self, intent: CardIntent, rng: &mut R) -> bool {
        match intent {
            CardIntent::Play(id) => {
                let Some(page) = self.active_page() else {
                    return false;
                };
                let Some(item) = page.find_item(id) else {
                    tracing::debug!(id, "card play ignored: unknown item");
                    return false;
                };
                let track = catalog::track_from_item(&item, page.song_fallback_seconds(), rng);
                tracing::info!(id, kind = %item.kind(), "card play");
                self.session.play_track(track);
                true
            }
            CardIntent::Like(id) => {
                self.toggle_like(id);
                true
            }
            CardIntent::Open(kind, id) => {
                self.navigate(Route::Detail { kind, id });
                true
            }
        }
    }

    /// Enter on the selected item: rows toggle, cards play.
    pub fn activate_selected(&mut self) -> bool {
        match self.selected_item() {
            Some(CatalogItem::Song(song)) => self.handle_row_intent(RowIntent::PlayPause(song.id)),
            Some(item) => self.handle_card_intent(CardIntent::Play(item.id())),
            None => false,
        }
    }

    /// Open the selected card's detail page. Songs have none.
    pub fn open_selected(&mut self) -> bool {
        match self.selected_item() {
            Some(item) if item.as_entity().is_some() => {
                self.handle_card_intent(CardIntent::Open(item.kind(), item.id()))
            }
            _ => false,
        }
    }

    pub fn like_selected(&mut self) -> bool {
        match self.selected_item() {
            Some(CatalogItem::Song(song)) => self.handle_row_intent(RowIntent::Like(song.id)),
            Some(item) => self.handle_card_intent(CardIntent::Like(item.id())),
            None => false,
        }
    }

    pub fn queue_selected(&mut self) -> bool {
        match self.selected_item() {
            Some(CatalogItem::Song(song)) => self.handle_row_intent(RowIntent::AddToQueue(song.id)),
            _ => false,
        }
    }

    /// "Play All" on a detail page.
    pub fn play_all(&mut self) -> bool {
        if !matches!(self.route, Route::Detail { .. }) {
            return false;
        }
        tracing::info!(title = ?self.detail.detail().map(|d| d.title), "play all");
        match self.detail.play_all_target() {
            Some(id) => self.handle_row_intent(RowIntent::PlayPause(id)),
            None => false,
        }
    }

    /// "Shuffle Play" on a detail page.
    pub fn shuffle_play(&mut self) -> bool {
        if !matches!(self.route, Route::Detail { .. }) {
            return false;
        }
        tracing::info!(title = ?self.detail.detail().map(|d| d.title), "shuffle play");
        match self.detail.shuffle_target(&mut rand::rng()) {
            Some(id) => self.handle_row_intent(RowIntent::PlayPause(id)),
            None => false,
        }
    }

    /// Send a gesture to the playback bar, with the active page providing
    /// the list skip next/previous walk.
    pub fn playback(&mut self, cmd: PlaybackCmd) -> bool {
        let Self {
            route,
            home,
            search,
            library,
            detail,
            session,
            liked,
            queue,
            status,
            ..
        } = self;
        let page: Option<&dyn PageView> = match *route {
            Route::Login => None,
            Route::Home => Some(&*home),
            Route::Search => Some(&*search),
            Route::Library => Some(&*library),
            Route::Detail { .. } => Some(&*detail),
        };
        let mut callbacks = PageCallbacks {
            page,
            liked,
            queue,
            status,
        };
        playback::dispatch(cmd, session, &mut callbacks)
    }

    pub fn on_tick(&mut self, tick: ClockTick) -> bool {
        self.session.on_tick(tick)
    }

    fn selected_item(&self) -> Option<CatalogItem> {
        self.active_page().and_then(|p| p.selected_item())
    }

    fn song_track(&self, id: &str) -> Option<Track> {
        let page = self.active_page()?;
        match page.find_item(id)? {
            CatalogItem::Song(song) => Some(catalog::track_from_song(
                &song,
                page.song_fallback_seconds(),
                page.fallback_art(),
            )),
            _ => None,
        }
    }

    fn toggle_like(&mut self, id: &str) {
        let now_liked = toggle_in(&mut self.liked, id);
        tracing::info!(id, liked = now_liked, "like toggled");
        self.set_status(if now_liked {
            "Added to Liked Songs"
        } else {
            "Removed from Liked Songs"
        });
    }
}

fn toggle_in(set: &mut BTreeSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

/// Bar callbacks for whatever page is on screen. Borrows the parts of
/// `App` other than the session, which `dispatch` lends separately.
struct PageCallbacks<'a> {
    page: Option<&'a dyn PageView>,
    liked: &'a mut BTreeSet<String>,
    queue: &'a mut VecDeque<Track>,
    status: &'a mut Option<String>,
}

impl PageCallbacks<'_> {
    fn page_tracks(&self) -> Vec<Track> {
        let Some(page) = self.page else {
            return Vec::new();
        };
        page.playable_songs()
            .iter()
            .map(|song| {
                catalog::track_from_song(song, page.song_fallback_seconds(), page.fallback_art())
            })
            .collect()
    }
}

impl<S: PositionSource> BarCallbacks<S> for PageCallbacks<'_> {
    fn on_play_pause(&mut self, session: &mut PlaybackSession<S>) {
        session.toggle_play_pause();
        tracing::debug!(playing = session.is_playing(), "play/pause");
    }

    fn on_skip_next(&mut self, session: &mut PlaybackSession<S>) {
        if let Some(track) = self.queue.pop_front() {
            tracing::info!(id = %track.id, "skip next from queue");
            start(session, track);
            return;
        }
        if session.repeat() == RepeatMode::One {
            restart(session);
            return;
        }
        let tracks = self.page_tracks();
        let current = session
            .current_track_id()
            .and_then(|id| tracks.iter().position(|t| t.id == id));
        match next_index(current, tracks.len(), session.shuffle(), session.repeat(), &mut rand::rng()) {
            Some(i) => {
                tracing::info!(id = %tracks[i].id, "skip next");
                start(session, tracks[i].clone());
            }
            None => *self.status = Some("End of list".to_string()),
        }
    }

    fn on_skip_previous(&mut self, session: &mut PlaybackSession<S>) {
        if session.elapsed_seconds() > RESTART_THRESHOLD_SECS || session.repeat() == RepeatMode::One {
            restart(session);
            return;
        }
        let tracks = self.page_tracks();
        let current = session
            .current_track_id()
            .and_then(|id| tracks.iter().position(|t| t.id == id));
        match previous_index(current, tracks.len(), session.repeat()) {
            Some(i) => {
                tracing::info!(id = %tracks[i].id, "skip previous");
                start(session, tracks[i].clone());
            }
            None => restart(session),
        }
    }

    fn on_seek(&mut self, _session: &mut PlaybackSession<S>, seconds: u64) {
        tracing::debug!(seconds, "seek");
    }

    fn on_volume_change(&mut self, _session: &mut PlaybackSession<S>, volume: f32) {
        tracing::debug!(volume, "volume");
    }

    fn optional_controls(&self) -> OptionalControls {
        BAR_CONTROLS
    }

    fn on_toggle_repeat(&mut self, session: &mut PlaybackSession<S>) {
        let mode = session.cycle_repeat();
        tracing::info!(?mode, "repeat");
        *self.status = Some(format!("Repeat: {}", mode.label()));
    }

    fn on_toggle_shuffle(&mut self, session: &mut PlaybackSession<S>) {
        let on = session.toggle_shuffle();
        tracing::info!(on, "shuffle");
        *self.status = Some(if on { "Shuffle on" } else { "Shuffle off" }.to_string());
    }

    fn on_like_track(&mut self, _session: &mut PlaybackSession<S>, track_id: &str) {
        let now_liked = toggle_in(self.liked, track_id);
        tracing::info!(id = track_id, liked = now_liked, "like toggled from bar");
        *self.status = Some(
            if now_liked {
                "Added to Liked Songs"
            } else {
                "Removed from Liked Songs"
            }
            .to_string(),
        );
    }
}

/// Play `track` from the start, restarting it if it is already loaded.
fn start<S: PositionSource>(session: &mut PlaybackSession<S>, track: Track) {
    if session.is_current(&track.id) {
        restart(session);
    } else {
        session.play_track(track);
    }
}

fn restart<S: PositionSource>(session: &mut PlaybackSession<S>) {
    session.seek(0);
    if !session.is_playing() {
        session.toggle_play_pause();
    }
}

/// Index skip next moves to, or `None` at the end of a non-repeating list.
/// Shuffle picks uniformly among the other entries.
pub fn next_index<R: Rng + ?Sized>(
    current: Option<usize>,
    len: usize,
    shuffle: bool,
    repeat: RepeatMode,
    rng: &mut R,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if shuffle {
        return Some(match current {
            Some(c) if len > 1 => {
                let pick = rng.random_range(0..len - 1);
                if pick >= c { pick + 1 } else { pick }
            }
            Some(c) => c,
            None => rng.random_range(0..len),
        });
    }
    match current {
        None => Some(0),
        Some(i) if i + 1 < len => Some(i + 1),
        Some(_) if repeat == RepeatMode::All => Some(0),
        Some(_) => None,
    }
}

/// Index skip previous moves to, or `None` when it should restart instead.
pub fn previous_index(current: Option<usize>, len: usize, repeat: RepeatMode) -> Option<usize> {
    match current {
        Some(0) if repeat == RepeatMode::All && len > 1 => Some(len - 1),
        Some(i) if i > 0 && i < len => Some(i - 1),
        _ => None,
    }
}
