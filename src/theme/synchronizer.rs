//! Keeps the root style in step with the selected palette and colour mode.
//!
//! Colour writes are deferred by two animation frames so they land after the
//! light/dark class toggle has been committed. Once scheduled, a write always
//! happens; there is no cancellation.

use super::palette::{ColorMode, Palette};
use super::storage::{PaletteStore, StorageEvent, StorageSubscription, STORAGE_KEY};
use super::style::StyleTarget;

/// Animation frames between scheduling a write and performing it.
const FRAME_DELAY: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApplyCause {
    ModeChange,
    Selection,
    StorageEvent,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledApply {
    palette: Palette,
    mode: ColorMode,
    frames_left: u8,
    cause: ApplyCause,
}

pub struct ThemeSynchronizer<S, T> {
    store: S,
    target: T,
    current: Palette,
    mounted: bool,
    resolved_mode: Option<ColorMode>,
    system_mode: Option<ColorMode>,
    subscription: Option<StorageSubscription>,
    scheduled: Vec<ScheduledApply>,
}

impl<S: PaletteStore, T: StyleTarget> ThemeSynchronizer<S, T> {
    pub fn new(store: S, target: T) -> Self {
        Self {
            store,
            target,
            current: Palette::DEFAULT,
            mounted: false,
            resolved_mode: None,
            system_mode: None,
            subscription: None,
            scheduled: Vec::new(),
        }
    }

    /// Load the persisted palette and start listening to other tabs.
    /// Calling it again while mounted does nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }

        self.current = match self.stored_palette() {
            Some(palette) => palette,
            None => {
                if let Some(raw) = self.store.read(STORAGE_KEY) {
                    tracing::warn!(value = %raw, "Ignoring invalid stored palette");
                }
                Palette::DEFAULT
            }
        };
        self.subscription = Some(self.store.subscribe());
        self.mounted = true;
        tracing::debug!(palette = self.current.name(), "Theme synchronizer mounted");

        self.sync_to_mode();
    }

    /// Stop listening for storage changes. Writes already scheduled still run.
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.mounted = false;
    }

    pub fn set_resolved_mode(&mut self, mode: Option<ColorMode>) {
        self.resolved_mode = mode;
        self.sync_to_mode();
    }

    pub fn set_system_mode(&mut self, mode: Option<ColorMode>) {
        self.system_mode = mode;
        self.sync_to_mode();
    }

    /// User picked a palette: persist it and apply with the current mode.
    pub fn select(&mut self, palette: Palette) {
        self.current = palette;
        self.store.write(STORAGE_KEY, palette.name());
        tracing::debug!(palette = palette.name(), "Palette selected");
        self.schedule(ApplyCause::Selection);
    }

    /// Adopt a palette written by another tab. Returns whether it was adopted.
    pub fn handle_storage_event(&mut self, event: &StorageEvent) -> bool {
        if !self.mounted || event.key != STORAGE_KEY {
            return false;
        }

        let Some(palette) = event.new_value.as_deref().and_then(Palette::from_name) else {
            return false;
        };

        if self.selection_in_flight() {
            tracing::debug!(
                palette = palette.name(),
                "Local selection in flight, ignoring storage event"
            );
            return false;
        }

        self.current = palette;
        self.schedule(ApplyCause::StorageEvent);
        true
    }

    /// Process every queued storage event. Returns how many were adopted.
    pub fn drain_storage_events(&mut self) -> usize {
        let mut adopted = 0;
        while let Some(event) = self.subscription.as_mut().and_then(StorageSubscription::try_next) {
            if self.handle_storage_event(&event) {
                adopted += 1;
            }
        }
        adopted
    }

    /// Advance one animation frame, performing writes that are now due.
    /// Returns how many palette applications ran.
    pub fn on_animation_frame(&mut self) -> usize {
        let mut due = Vec::new();
        self.scheduled.retain_mut(|apply| {
            apply.frames_left = apply.frames_left.saturating_sub(1);
            if apply.frames_left == 0 {
                due.push(*apply);
                false
            } else {
                true
            }
        });

        for apply in &due {
            for (key, value) in apply.palette.colors(apply.mode) {
                self.target.set_property(&format!("--{key}"), value);
            }
        }
        due.len()
    }

    pub fn current(&self) -> Palette {
        self.current
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn effective_mode(&self) -> ColorMode {
        ColorMode::effective(self.resolved_mode, self.system_mode)
    }

    /// Number of writes waiting for their frame.
    pub fn pending(&self) -> usize {
        self.scheduled.len()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mode became known or changed: trust storage over memory, then apply.
    fn sync_to_mode(&mut self) {
        if !self.mounted || self.resolved_mode.or(self.system_mode).is_none() {
            return;
        }

        if let Some(stored) = self.stored_palette() {
            if stored != self.current {
                tracing::debug!(
                    from = self.current.name(),
                    to = stored.name(),
                    "Reconciled palette with storage"
                );
                self.current = stored;
            }
        }

        self.schedule(ApplyCause::ModeChange);
    }

    fn schedule(&mut self, cause: ApplyCause) {
        if !self.mounted {
            return;
        }
        self.scheduled.push(ScheduledApply {
            palette: self.current,
            mode: self.effective_mode(),
            frames_left: FRAME_DELAY,
            cause,
        });
    }

    fn selection_in_flight(&self) -> bool {
        self.scheduled
            .iter()
            .any(|apply| apply.cause == ApplyCause::Selection)
    }

    fn stored_palette(&self) -> Option<Palette> {
        self.store
            .read(STORAGE_KEY)
            .as_deref()
            .and_then(Palette::from_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{RootStyle, SharedStorage, TabStorage};

    fn tab(storage: &SharedStorage) -> ThemeSynchronizer<TabStorage, RootStyle> {
        ThemeSynchronizer::new(storage.tab(), RootStyle::new())
    }

    fn flush(sync: &mut ThemeSynchronizer<TabStorage, RootStyle>) {
        sync.on_animation_frame();
        sync.on_animation_frame();
    }

    fn assert_applied(style: &RootStyle, palette: Palette, mode: ColorMode) {
        for (key, value) in palette.colors(mode) {
            assert_eq!(style.get(&format!("--{key}")), Some(*value), "--{key}");
        }
    }

    #[test]
    fn test_select_cyan_in_dark_mode() {
        let storage = SharedStorage::new();
        let mut sync = tab(&storage);
        sync.mount();
        sync.set_resolved_mode(Some(ColorMode::Dark));

        sync.select(Palette::Cyan);
        flush(&mut sync);

        assert_applied(sync.target(), Palette::Cyan, ColorMode::Dark);
        assert_eq!(storage.read(STORAGE_KEY).as_deref(), Some("cyan"));
    }

    #[test]
    fn test_reload_restores_selection() {
        let storage = SharedStorage::new();
        let mut first = tab(&storage);
        first.mount();
        first.select(Palette::Purple);
        drop(first);

        let mut reloaded = tab(&storage);
        reloaded.mount();
        reloaded.set_resolved_mode(Some(ColorMode::Light));
        flush(&mut reloaded);

        assert_eq!(reloaded.current(), Palette::Purple);
        assert_applied(reloaded.target(), Palette::Purple, ColorMode::Light);
    }

    #[test]
    fn test_corrupted_storage_falls_back_to_default() {
        let storage = SharedStorage::new();
        storage.write(STORAGE_KEY, "neon-pink");

        let mut sync = tab(&storage);
        sync.mount();
        sync.set_system_mode(Some(ColorMode::Dark));
        flush(&mut sync);

        assert_eq!(sync.current(), Palette::DEFAULT);
        assert_applied(sync.target(), Palette::Emerald, ColorMode::Dark);
    }

    #[test]
    fn test_nothing_applied_before_mount() {
        let storage = SharedStorage::new();
        let mut sync = tab(&storage);

        sync.set_resolved_mode(Some(ColorMode::Dark));
        sync.select(Palette::Rose);
        flush(&mut sync);

        assert!(sync.target().is_empty());
        assert_eq!(sync.pending(), 0);
    }

    #[test]
    fn test_mode_unknown_defers_apply() {
        let storage = SharedStorage::new();
        let mut sync = tab(&storage);
        sync.mount();
        flush(&mut sync);
        assert!(sync.target().is_empty());

        sync.set_resolved_mode(Some(ColorMode::Light));
        flush(&mut sync);
        assert_applied(sync.target(), Palette::DEFAULT, ColorMode::Light);
    }

    #[test]
    fn test_write_lands_on_second_frame() {
        let storage = SharedStorage::new();
        let mut sync = tab(&storage);
        sync.mount();
        sync.set_resolved_mode(Some(ColorMode::Dark));

        assert_eq!(sync.on_animation_frame(), 0);
        assert!(sync.target().is_empty());
        assert_eq!(sync.on_animation_frame(), 1);
        assert_applied(sync.target(), Palette::DEFAULT, ColorMode::Dark);
        assert_eq!(sync.pending(), 0);
    }

    #[test]
    fn test_mode_change_reapplies_current_palette() {
        let storage = SharedStorage::new();
        let mut sync = tab(&storage);
        sync.mount();
        sync.set_resolved_mode(Some(ColorMode::Light));
        sync.select(Palette::Golden);
        flush(&mut sync);
        assert_applied(sync.target(), Palette::Golden, ColorMode::Light);

        sync.set_resolved_mode(Some(ColorMode::Dark));
        flush(&mut sync);
        assert_applied(sync.target(), Palette::Golden, ColorMode::Dark);
    }

    #[test]
    fn test_mode_change_reconciles_with_storage() {
        let storage = SharedStorage::new();
        let mut sync = tab(&storage);
        sync.mount();

        // Event queued but never drained
        storage.write(STORAGE_KEY, "rose");
        sync.set_resolved_mode(Some(ColorMode::Dark));
        flush(&mut sync);

        assert_eq!(sync.current(), Palette::Rose);
        assert_applied(sync.target(), Palette::Rose, ColorMode::Dark);
    }

    #[test]
    fn test_other_tab_selection_is_adopted() {
        let storage = SharedStorage::new();
        let mut a = tab(&storage);
        let mut b = tab(&storage);
        a.mount();
        b.mount();
        a.set_resolved_mode(Some(ColorMode::Light));
        b.set_resolved_mode(Some(ColorMode::Light));
        flush(&mut a);
        flush(&mut b);

        a.select(Palette::Cyan);
        assert_eq!(b.drain_storage_events(), 1);
        flush(&mut b);

        assert_eq!(b.current(), Palette::Cyan);
        assert_applied(b.target(), Palette::Cyan, ColorMode::Light);
        // A tab does not react to its own write
        assert_eq!(a.drain_storage_events(), 0);
    }

    #[test]
    fn test_remote_change_ignored_while_local_selection_pending() {
        let storage = SharedStorage::new();
        let mut a = tab(&storage);
        let mut b = tab(&storage);
        a.mount();
        b.mount();
        b.set_resolved_mode(Some(ColorMode::Dark));

        a.select(Palette::Rose);
        b.select(Palette::Golden);
        assert_eq!(b.drain_storage_events(), 0);
        flush(&mut b);

        assert_eq!(b.current(), Palette::Golden);
        assert_applied(b.target(), Palette::Golden, ColorMode::Dark);
    }

    #[test]
    fn test_invalid_remote_value_ignored() {
        let storage = SharedStorage::new();
        let mut sync = tab(&storage);
        sync.mount();

        storage.write(STORAGE_KEY, "not-a-palette");
        storage.write("unrelated", "cyan");

        assert_eq!(sync.drain_storage_events(), 0);
        assert_eq!(sync.current(), Palette::DEFAULT);
    }

    #[test]
    fn test_unmount_stops_listening_but_not_scheduled_writes() {
        let storage = SharedStorage::new();
        let mut sync = tab(&storage);
        sync.mount();
        sync.set_resolved_mode(Some(ColorMode::Light));
        sync.unmount();

        storage.write(STORAGE_KEY, "purple");
        assert_eq!(sync.drain_storage_events(), 0);
        assert_eq!(sync.current(), Palette::DEFAULT);

        flush(&mut sync);
        assert_applied(sync.target(), Palette::DEFAULT, ColorMode::Light);
    }

    #[test]
    fn test_mount_is_idempotent() {
        let storage = SharedStorage::new();
        let mut sync = tab(&storage);
        sync.mount();
        sync.select(Palette::Cyan);
        storage.write(STORAGE_KEY, "rose");

        sync.mount();
        assert_eq!(sync.current(), Palette::Cyan);
        assert!(sync.is_mounted());
    }
}
