// ============================================================================
// PROFILE VIEWMODEL - Perfil confirmado + borrador de edición
// ============================================================================

use crate::models::{Profile, ProfileExtras, ProfileUpdate, Units};
use crate::utils::constants::AVATAR_MAX_BYTES;

/// Cambios que la página aplica sobre el editor
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    /// Perfil recibido del servidor; no interrumpe una edición en curso
    Loaded(Profile),
    StartEdit,
    CancelEdit,
    SetPhone(String),
    SetAvatarUrl(String),
    SetUnits(Units),
    /// Respuesta de `PATCH /users/me`
    Saved(Profile),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileEditor {
    pub committed: Profile,
    /// Some mientras se edita
    pub draft: Option<ProfileExtras>,
}

impl ProfileEditor {
    pub fn new(committed: Profile) -> Self {
        Self {
            committed,
            draft: None,
        }
    }

    pub fn apply(&mut self, action: ProfileAction) {
        match action {
            ProfileAction::Loaded(profile) => self.committed = profile,
            ProfileAction::StartEdit => self.start_edit(),
            ProfileAction::CancelEdit => self.cancel_edit(),
            ProfileAction::SetPhone(phone) => self.set_phone(phone),
            ProfileAction::SetAvatarUrl(avatar_url) => self.set_avatar_url(avatar_url),
            ProfileAction::SetUnits(units) => self.set_units(units),
            ProfileAction::Saved(profile) => self.commit(profile),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Lo que se pinta: el borrador si se está editando
    pub fn view_extras(&self) -> ProfileExtras {
        self.draft.clone().unwrap_or_else(|| self.committed.extras())
    }

    pub fn start_edit(&mut self) {
        self.draft = Some(self.committed.extras());
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    pub fn set_phone(&mut self, phone: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.phone = phone;
        }
    }

    pub fn set_avatar_url(&mut self, avatar_url: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.avatar_url = avatar_url;
        }
    }

    pub fn set_units(&mut self, units: Units) {
        if let Some(draft) = self.draft.as_mut() {
            draft.units = units;
        }
    }

    /// Campos del borrador que difieren del perfil confirmado
    pub fn pending_update(&self) -> ProfileUpdate {
        let Some(draft) = self.draft.as_ref() else {
            return ProfileUpdate::default();
        };
        let current = self.committed.extras();
        ProfileUpdate {
            phone: (draft.phone != current.phone).then(|| draft.phone.trim().to_string()),
            preferred_units: (draft.units != current.units).then_some(draft.units),
            avatar_url: (draft.avatar_url != current.avatar_url).then(|| draft.avatar_url.clone()),
        }
    }

    /// Sustituye el perfil confirmado por la respuesta del servidor y cierra la edición
    pub fn commit(&mut self, server_profile: Profile) {
        self.committed = server_profile;
        self.draft = None;
    }
}

/// Comprueba un fichero de avatar antes de codificarlo
pub fn validate_avatar(mime_type: &str, size_bytes: u64) -> Result<(), String> {
    if !mime_type.starts_with("image/") {
        return Err("El avatar debe ser una imagen.".to_string());
    }
    if size_bytes > AVATAR_MAX_BYTES {
        return Err("La imagen no puede superar los 2 MB.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed() -> Profile {
        Profile {
            username: Some("ana".to_string()),
            phone: Some("600".to_string()),
            ..Profile::default()
        }
    }

    #[test]
    fn cancel_discards_draft() {
        let mut editor = ProfileEditor::new(committed());
        editor.start_edit();
        editor.set_phone("700".to_string());
        assert_eq!(editor.view_extras().phone, "700");

        editor.cancel_edit();
        assert!(!editor.is_editing());
        assert_eq!(editor.view_extras().phone, "600");
        assert_eq!(editor.committed, committed());
    }

    #[test]
    fn pending_update_contains_only_changed_fields() {
        let mut editor = ProfileEditor::new(committed());
        editor.start_edit();
        assert!(editor.pending_update().is_empty());

        editor.set_units(Units::Mi);
        let update = editor.pending_update();
        assert_eq!(update.preferred_units, Some(Units::Mi));
        assert!(update.phone.is_none());
        assert!(update.avatar_url.is_none());
    }

    #[test]
    fn edits_ignored_when_not_editing() {
        let mut editor = ProfileEditor::new(committed());
        editor.set_phone("999".to_string());
        assert!(editor.pending_update().is_empty());
        assert_eq!(editor.view_extras().phone, "600");
    }

    #[test]
    fn commit_replaces_profile_with_server_copy() {
        let mut editor = ProfileEditor::new(committed());
        editor.start_edit();
        editor.set_phone("700".to_string());
        let server = Profile {
            phone: Some("700".to_string()),
            ..committed()
        };
        editor.commit(server.clone());
        assert_eq!(editor.committed, server);
        assert!(!editor.is_editing());
    }

    #[test]
    fn server_load_keeps_edit_in_progress() {
        let mut editor = ProfileEditor::default();
        editor.apply(ProfileAction::StartEdit);
        editor.apply(ProfileAction::SetPhone("611".to_string()));
        editor.apply(ProfileAction::Loaded(committed()));
        assert!(editor.is_editing());
        assert_eq!(editor.view_extras().phone, "611");
        assert_eq!(editor.pending_update().phone.as_deref(), Some("611"));

        editor.apply(ProfileAction::Saved(committed()));
        assert!(!editor.is_editing());
    }

    #[test]
    fn avatar_checks() {
        assert!(validate_avatar("image/png", 1024).is_ok());
        assert!(validate_avatar("application/pdf", 1024).is_err());
        assert!(validate_avatar("image/jpeg", 2 * 1024 * 1024).is_ok());
        assert!(validate_avatar("image/jpeg", 2 * 1024 * 1024 + 1).is_err());
    }
}
