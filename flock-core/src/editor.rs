//! Bozza di modifica del profilo (BioCard).

use tracing::debug;

use crate::error::EditorError;
use crate::models::{ProfileField, UserProfile};

/// Profilo confermato più, in modalità modifica, una bozza separata.
/// La bozza esiste solo mentre si modifica (`draft.is_some()` ⇔ `is_editing()`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEditor {
    committed: UserProfile,
    draft: Option<UserProfile>,
}

impl ProfileEditor {
    pub fn new(committed: UserProfile) -> Self {
        ProfileEditor { committed, draft: None }
    }

    pub fn committed(&self) -> &UserProfile {
        &self.committed
    }

    pub fn draft(&self) -> Option<&UserProfile> {
        self.draft.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Entra in modifica copiando il profilo confermato. Idempotente.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.committed.clone());
        }
    }

    /// Aggiorna un solo campo della bozza. Restituisce `false` fuori dalla modifica.
    pub fn on_field_change(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set(field, value.into());
                true
            }
            None => {
                debug!(field = field.as_str(), "ignoring change outside edit mode");
                false
            }
        }
    }

    /// Come [`ProfileEditor::on_field_change`] a partire dall'attributo `name` dell'input.
    pub fn on_field_change_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<bool, EditorError> {
        let field: ProfileField = name.parse()?;
        Ok(self.on_field_change(field, value))
    }

    /// Conferma la bozza. Non c'è persistenza: il salvataggio resta al chiamante.
    pub fn on_save(&mut self) -> &UserProfile {
        if let Some(draft) = self.draft.take() {
            self.committed = draft;
        }
        &self.committed
    }

    /// Scarta la bozza; il profilo confermato resta intatto.
    pub fn on_cancel(&mut self) {
        self.draft = None;
    }
}
