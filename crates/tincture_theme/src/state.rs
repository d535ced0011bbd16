//! Caller-owned theme state
//!
//! `ThemeState` holds the active theme, color scheme and scale factor for a
//! host that wants one place to swap them at runtime. It is an ordinary value:
//! create it, share it behind an `Arc`, and read [`ThemeSnapshot`]s from any
//! thread. Widgets resolve against a snapshot, never against the state itself,
//! so one frame always sees one consistent theme.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tincture_core::ColorScheme;

use crate::scale::ScaleFactor;
use crate::theme::DesignSystem;

/// A consistent view of the theme state at one instant
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeSnapshot {
    pub theme: Arc<DesignSystem>,
    pub scheme: ColorScheme,
    pub scale_factor: ScaleFactor,
    /// [`ThemeState::generation`] at the time of the snapshot
    pub generation: u64,
}

/// Active theme, scheme and scale factor
#[derive(Debug)]
pub struct ThemeState {
    current: RwLock<ThemeSnapshot>,

    /// Bumped on every effective change
    generation: AtomicU64,

    /// Set on every effective change, cleared by the host after redrawing
    needs_redraw: AtomicBool,
}

impl ThemeState {
    pub fn new(theme: impl Into<Arc<DesignSystem>>, scheme: ColorScheme) -> Self {
        Self {
            current: RwLock::new(ThemeSnapshot {
                theme: theme.into(),
                scheme,
                scale_factor: ScaleFactor::IDENTITY,
                generation: 0,
            }),
            generation: AtomicU64::new(0),
            needs_redraw: AtomicBool::new(false),
        }
    }

    // Writers always leave a fully formed snapshot behind, so a poisoned lock
    // still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, ThemeSnapshot> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ThemeSnapshot> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }

    // Bumps the generation before releasing the write guard, so no reader
    // sees the new snapshot paired with the old generation.
    fn commit(&self, mut current: RwLockWriteGuard<'_, ThemeSnapshot>) {
        current.generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.needs_redraw.store(true, Ordering::Release);
    }

    // ========== Reads ==========

    pub fn snapshot(&self) -> ThemeSnapshot {
        self.read().clone()
    }

    pub fn theme(&self) -> Arc<DesignSystem> {
        Arc::clone(&self.read().theme)
    }

    pub fn scheme(&self) -> ColorScheme {
        self.read().scheme
    }

    pub fn scale_factor(&self) -> ScaleFactor {
        self.read().scale_factor
    }

    /// Number of effective changes since construction
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw.load(Ordering::Acquire)
    }

    pub fn clear_redraw(&self) {
        self.needs_redraw.store(false, Ordering::Release);
    }

    // ========== Writes ==========

    /// Swaps the active theme; returns the previous one
    pub fn set_theme(&self, theme: impl Into<Arc<DesignSystem>>) -> Arc<DesignSystem> {
        let theme = theme.into();
        let mut current = self.write();
        if Arc::ptr_eq(&current.theme, &theme) || *current.theme == *theme {
            return Arc::clone(&current.theme);
        }
        tracing::debug!(
            from = current.theme.name(),
            to = theme.name(),
            "ThemeState::set_theme"
        );
        let previous = std::mem::replace(&mut current.theme, theme);
        self.commit(current);
        previous
    }

    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.write();
        if current.scheme == scheme {
            return;
        }
        tracing::debug!(
            "ThemeState::set_scheme - switching from {:?} to {:?}",
            current.scheme,
            scheme
        );
        current.scheme = scheme;
        self.commit(current);
    }

    /// Flips between light and dark; returns the new scheme
    pub fn toggle_scheme(&self) -> ColorScheme {
        let mut current = self.write();
        current.scheme = current.scheme.toggle();
        let scheme = current.scheme;
        tracing::debug!(scheme = scheme.id(), "ThemeState::toggle_scheme");
        self.commit(current);
        scheme
    }

    /// Sets the Dynamic Type factor; invalid factors normalise to 1.0
    pub fn set_scale_factor(&self, factor: impl Into<ScaleFactor>) {
        let factor = factor.into();
        let mut current = self.write();
        if current.scale_factor == factor {
            return;
        }
        tracing::debug!(factor = factor.get(), "ThemeState::set_scale_factor");
        current.scale_factor = factor;
        self.commit(current);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(DesignSystem::default(), ColorScheme::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_initial_state() {
        let state = ThemeState::default();
        assert_eq!(state.scheme(), ColorScheme::Light);
        assert_eq!(state.scale_factor(), ScaleFactor::IDENTITY);
        assert_eq!(state.generation(), 0);
        assert!(!state.needs_redraw());
        assert_eq!(state.theme().name(), "Default");
    }

    #[test]
    fn test_changes_bump_generation() {
        let state = ThemeState::default();

        state.set_scheme(ColorScheme::Dark);
        assert_eq!(state.generation(), 1);
        assert!(state.needs_redraw());
        state.clear_redraw();
        assert!(!state.needs_redraw());

        // No-op writes leave the generation alone
        state.set_scheme(ColorScheme::Dark);
        state.set_theme(DesignSystem::default());
        state.set_scale_factor(1.0);
        assert_eq!(state.generation(), 1);
        assert!(!state.needs_redraw());

        assert_eq!(state.toggle_scheme(), ColorScheme::Light);
        state.set_scale_factor(1.3);
        let previous = state.set_theme(DesignSystem::pop());
        assert_eq!(previous.name(), "Default");
        assert_eq!(state.generation(), 4);
    }

    #[test]
    fn test_invalid_scale_factor_normalised() {
        let state = ThemeState::default();
        state.set_scale_factor(2.0);
        state.set_scale_factor(f32::NAN);
        assert_eq!(state.scale_factor().get(), 1.0);
    }

    #[test]
    fn test_snapshot_is_consistent_across_threads() {
        let state = Arc::new(ThemeState::new(DesignSystem::minimal(), ColorScheme::Light));

        let writer = {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for _ in 0..100 {
                    state.set_theme(DesignSystem::pop());
                    state.set_theme(DesignSystem::minimal());
                }
            })
        };

        for _ in 0..100 {
            let snapshot = state.snapshot();
            let name = snapshot.theme.name();
            assert!(name == "Minimal" || name == "Pop");
            assert_eq!(snapshot.scheme, ColorScheme::Light);
        }

        writer.join().unwrap();
        assert_eq!(state.theme().name(), "Minimal");
    }

    #[test]
    fn test_snapshot_carries_its_generation() {
        let state = Arc::new(ThemeState::default());

        let writer = {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for _ in 0..200 {
                    state.toggle_scheme();
                }
            })
        };

        for _ in 0..200 {
            let snapshot = state.snapshot();
            // Generation parity tracks the toggled scheme
            let expected = if snapshot.generation % 2 == 0 {
                ColorScheme::Light
            } else {
                ColorScheme::Dark
            };
            assert_eq!(snapshot.scheme, expected);
            assert!(state.generation() >= snapshot.generation);
        }

        writer.join().unwrap();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.generation, 200);
        assert_eq!(snapshot.generation, state.generation());
    }
}
