use flock_core::{
    HubBoard, HubSelection, IdentityProvider, LoadOutcome, PostsApi, SubmitOutcome, SUBMIT_ALERT,
};
use tracing::warn;

/// Una bacheca collegata a un trasporto e a un'identità.
/// Le operazioni prendono `&mut self`, quindi non si sovrappongono mai.
pub struct HubSession<A, I> {
    api: A,
    identity: I,
    board: HubBoard,
}

impl<A, I> HubSession<A, I>
where
    A: PostsApi,
    I: IdentityProvider,
{
    pub fn new(api: A, identity: I, selection: HubSelection) -> Self {
        HubSession { api, identity, board: HubBoard::new(selection) }
    }

    pub fn board(&self) -> &HubBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut HubBoard {
        &mut self.board
    }

    pub async fn load(&mut self) -> LoadOutcome {
        let ticket = self.board.begin_load();
        let result = self.api.fetch_posts(ticket.query()).await;
        self.board.finish_load(ticket, result)
    }

    /// `None` se l'hub non è cambiato.
    pub async fn navigate(&mut self, selection: HubSelection) -> Option<LoadOutcome> {
        let ticket = self.board.navigate(selection)?;
        let result = self.api.fetch_posts(ticket.query()).await;
        Some(self.board.finish_load(ticket, result))
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let ticket = match self.board.begin_submit(&self.identity) {
            Ok(ticket) => ticket,
            Err(error) => {
                warn!(%error, "cannot submit post");
                return SubmitOutcome::Failed { error, alert: SUBMIT_ALERT };
            }
        };
        let result = self.api.create_post(ticket.request()).await;
        self.board.finish_submit(ticket, result)
    }
}
