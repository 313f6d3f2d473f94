// ============================================================================
// ALERT SURFACE - Una sola alerta visible, la última gana
// ============================================================================
// Cada alerta lleva su generación; el auto-ocultado de una alerta vieja
// no puede borrar la que la sustituyó
// ============================================================================

use crate::models::AlertMessage;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertSurface {
    pub current: Option<AlertMessage>,
    pub generation: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlertAction {
    Show { message: AlertMessage, generation: u32 },
    /// Fin del temporizador de la alerta `generation`
    Expire(u32),
    /// Cierre manual
    Hide,
}

impl AlertSurface {
    pub fn apply(&mut self, action: AlertAction) {
        match action {
            AlertAction::Show { message, generation } => {
                self.current = Some(message);
                self.generation = generation;
            }
            AlertAction::Expire(generation) => {
                if generation == self.generation {
                    self.current = None;
                }
            }
            AlertAction::Hide => self.current = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertKind;

    fn message(text: &str, kind: AlertKind) -> AlertMessage {
        AlertMessage {
            message: text.to_string(),
            kind,
        }
    }

    #[test]
    fn last_alert_wins() {
        let mut surface = AlertSurface::default();
        surface.apply(AlertAction::Show {
            message: message("Primera", AlertKind::Warning),
            generation: 1,
        });
        surface.apply(AlertAction::Show {
            message: message("Segunda", AlertKind::Error),
            generation: 2,
        });
        assert_eq!(surface.current, Some(message("Segunda", AlertKind::Error)));
    }

    #[test]
    fn stale_expiry_does_not_hide_replacement() {
        let mut surface = AlertSurface::default();
        surface.apply(AlertAction::Show {
            message: message("Primera", AlertKind::Error),
            generation: 1,
        });
        surface.apply(AlertAction::Show {
            message: message("Segunda", AlertKind::Success),
            generation: 2,
        });

        surface.apply(AlertAction::Expire(1));
        assert_eq!(surface.current, Some(message("Segunda", AlertKind::Success)));

        surface.apply(AlertAction::Expire(2));
        assert_eq!(surface.current, None);
    }

    #[test]
    fn close_hides_immediately() {
        let mut surface = AlertSurface::default();
        surface.apply(AlertAction::Show {
            message: message("Ruta guardada", AlertKind::Success),
            generation: 7,
        });
        surface.apply(AlertAction::Hide);
        assert_eq!(surface.current, None);
        // Su temporizador ya no tiene nada que ocultar
        surface.apply(AlertAction::Expire(7));
        assert_eq!(surface.current, None);
    }
}
