use std::cell::Cell;
use std::rc::Rc;

/// Contador compartido entre un efecto y sus tareas asíncronas.
/// Cada `advance` invalida los tickets anteriores: una respuesta que llega
/// con un ticket viejo se descarta.
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u32>>);

impl Generation {
    pub fn advance(&self) -> u32 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.0.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_invalidates_older_tickets() {
        let generation = Generation::default();
        let first = generation.advance();
        assert!(generation.is_current(first));

        // Las copias comparten el contador (como el efecto y su spawn_local)
        let shared = generation.clone();
        let second = shared.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
