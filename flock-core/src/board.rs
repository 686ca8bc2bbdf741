//! Stato della bacheca di un hub (pagina SingleHub).
//!
//! Nessun I/O qui: il chiamante apre una richiesta con `begin_*`, la esegue col
//! trasporto che preferisce e consegna il risultato a `finish_*`.
//! Ogni lettura è marcata con un numero di sequenza; vince solo l'ultima.

use std::mem;

use tracing::{debug, info, warn};

use crate::error::{FetchError, SubmitError, SUBMIT_ALERT};
use crate::models::{HubId, HubSelection, IdentityProvider, Post, PostRecord};
use crate::protocol::http::{CreatePostRequest, ListPostsQuery};

/// Stato della lista di post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nessuna lettura ancora partita.
    Idle,
    /// Lettura in corso; contiene ciò che resta visibile nel frattempo.
    Loading(Vec<Post>),
    Loaded(Vec<Post>),
    /// Il backend ha risposto con una lista vuota.
    Empty,
    /// Backend irraggiungibile o risposta inutilizzabile.
    Failed(FetchError),
}

/// Riferimento a una lettura aperta con [`HubBoard::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    hub_id: HubId,
}

impl LoadTicket {
    pub fn hub_id(&self) -> HubId {
        self.hub_id
    }

    pub fn query(&self) -> ListPostsQuery {
        ListPostsQuery { interest_id: self.hub_id }
    }
}

/// Riferimento a una creazione aperta con [`HubBoard::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    hub_id: HubId,
    request: CreatePostRequest,
}

impl SubmitTicket {
    pub fn request(&self) -> &CreatePostRequest {
        &self.request
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Empty,
    Failed(FetchError),
    /// Risposta di una lettura superata da una più recente: scartata.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `shown` è falso se nel frattempo l'utente ha cambiato hub.
    Created { post: Post, shown: bool },
    /// `alert` va mostrato all'utente in modo bloccante.
    Failed { error: SubmitError, alert: &'static str },
}

#[derive(Debug, Clone)]
pub struct HubBoard {
    selection: HubSelection,
    state: LoadState,
    draft_title: String,
    draft_body: String,
    /// Ultimo numero di sequenza emesso.
    latest_load: u64,
    load_pending: bool,
    /// Post confermati mentre una lettura era in corso, in ordine di creazione.
    confirmed_during_load: Vec<Post>,
    submitting: bool,
}

impl HubBoard {
    pub fn new(selection: HubSelection) -> Self {
        HubBoard {
            selection,
            state: LoadState::Idle,
            draft_title: String::new(),
            draft_body: String::new(),
            latest_load: 0,
            load_pending: false,
            confirmed_during_load: Vec::new(),
            submitting: false,
        }
    }

    pub fn selection(&self) -> &HubSelection {
        &self.selection
    }

    pub fn hub_id(&self) -> HubId {
        self.selection.hub_id
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Post visibili, dal più recente.
    pub fn posts(&self) -> &[Post] {
        match &self.state {
            LoadState::Loading(posts) | LoadState::Loaded(posts) => posts.as_slice(),
            LoadState::Idle | LoadState::Empty | LoadState::Failed(_) => &[],
        }
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_body(&self) -> &str {
        &self.draft_body
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft_title = title.into();
    }

    pub fn set_draft_body(&mut self, body: impl Into<String>) {
        self.draft_body = body.into();
    }

    pub fn is_loading(&self) -> bool {
        self.load_pending
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Applica nuovi parametri di navigazione. Ricarica solo se cambia l'hub.
    pub fn navigate(&mut self, selection: HubSelection) -> Option<LoadTicket> {
        let hub_changed = selection.hub_id != self.selection.hub_id;
        self.selection = selection;
        if !hub_changed {
            return None;
        }
        // i post del vecchio hub non devono restare sotto il titolo del nuovo
        self.state = LoadState::Loading(Vec::new());
        self.confirmed_during_load.clear();
        Some(self.begin_load())
    }

    /// Apre una lettura per l'hub corrente. Invalida quelle ancora in volo.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_load += 1;
        self.load_pending = true;
        let visible = self.posts().to_vec();
        self.state = LoadState::Loading(visible);
        let ticket = LoadTicket { seq: self.latest_load, hub_id: self.selection.hub_id };
        debug!(hub = %ticket.hub_id, seq = ticket.seq, "loading posts");
        ticket
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<PostRecord>, FetchError>,
    ) -> LoadOutcome {
        if ticket.seq != self.latest_load {
            debug!(hub = %ticket.hub_id, seq = ticket.seq, latest = self.latest_load, "discarding stale posts response");
            return LoadOutcome::Stale;
        }
        self.load_pending = false;
        let carried = mem::take(&mut self.confirmed_during_load);

        match result {
            Ok(records) => {
                let mut posts: Vec<Post> = records.into_iter().map(Post::from).collect();
                // creati durante la lettura: la risposta potrebbe non contenerli ancora
                for post in carried {
                    if !posts.iter().any(|p| p.post_id == post.post_id) {
                        posts.insert(0, post);
                    }
                }
                info!(hub = %ticket.hub_id, count = posts.len(), "posts loaded");
                if posts.is_empty() {
                    self.state = LoadState::Empty;
                    LoadOutcome::Empty
                } else {
                    let count = posts.len();
                    self.state = LoadState::Loaded(posts);
                    LoadOutcome::Loaded { count }
                }
            }
            Err(error) => {
                warn!(hub = %ticket.hub_id, %error, "failed to fetch posts");
                self.state = LoadState::Failed(error.clone());
                LoadOutcome::Failed(error)
            }
        }
    }

    /// Prepara la richiesta di creazione con le bozze correnti.
    /// Nessun inserimento ottimistico: la lista cambia solo in [`HubBoard::finish_submit`].
    pub fn begin_submit(
        &mut self,
        identity: &dyn IdentityProvider,
    ) -> Result<SubmitTicket, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let user_id = identity.current_user().ok_or(SubmitError::Unauthenticated)?;
        let request = CreatePostRequest {
            user_id,
            interest_id: self.selection.hub_id,
            post_title: self.draft_title.clone(),
            post_text: self.draft_body.clone(),
        };
        info!(hub = %request.interest_id, user = %request.user_id, title = %request.post_title, "submitting post");
        self.submitting = true;
        Ok(SubmitTicket { hub_id: self.selection.hub_id, request })
    }

    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<PostRecord, SubmitError>,
    ) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(record) => {
                let post = Post::confirmed(record);
                self.draft_title.clear();
                self.draft_body.clear();
                let shown = ticket.hub_id == self.selection.hub_id;
                if shown {
                    self.prepend(post.clone());
                } else {
                    info!(hub = %ticket.hub_id, current = %self.selection.hub_id, "post created for a hub no longer shown");
                }
                info!(hub = %ticket.hub_id, post_id = %post.post_id, "post created");
                SubmitOutcome::Created { post, shown }
            }
            Err(error) => {
                warn!(hub = %ticket.hub_id, %error, "error creating post");
                SubmitOutcome::Failed { error, alert: SUBMIT_ALERT }
            }
        }
    }

    fn prepend(&mut self, post: Post) {
        if self.load_pending {
            self.confirmed_during_load.push(post.clone());
        }
        match &mut self.state {
            LoadState::Loading(posts) | LoadState::Loaded(posts) => posts.insert(0, post),
            LoadState::Idle | LoadState::Empty | LoadState::Failed(_) => {
                self.state = LoadState::Loaded(vec![post]);
            }
        }
    }
}
