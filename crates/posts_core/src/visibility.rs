//! Visibility-triggered loading.
//!
//! A single [`Watcher`] observes the last rendered post. [`VisibilityLoader::bind`]
//! plays the role of a ref callback: it is offered the current last item on
//! every render and only rebinds when that item or the loader dependencies
//! changed. The platform reports visibility of the watched item through
//! [`VisibilityLoader::on_intersection`].

use crate::PostId;

pub type WatcherId = u64;

/// Inputs the binding depends on. A change in any of them rebinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderDeps {
    pub has_next_page: bool,
    pub is_fetching: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Watcher {
    id: WatcherId,
    target: PostId,
    has_next_page: bool,
    visible: bool,
}

impl Watcher {
    pub fn id(&self) -> WatcherId {
        self.id
    }

    pub fn target(&self) -> PostId {
        self.target
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilityLoader {
    watcher: Option<Watcher>,
    bound: Option<(Option<PostId>, LoaderDeps)>,
    last_id: WatcherId,
}

impl VisibilityLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers the current last item. Returns true when the watcher was
    /// replaced or removed.
    ///
    /// While a fetch is in flight the existing watcher is kept as is.
    pub fn bind(&mut self, last_item: Option<PostId>, deps: LoaderDeps) -> bool {
        if self.bound == Some((last_item, deps)) {
            return false;
        }
        self.bound = Some((last_item, deps));

        if deps.is_fetching {
            return false;
        }

        let previous = self.release();
        if let Some(target) = last_item {
            self.last_id += 1;
            self.watcher = Some(Watcher {
                id: self.last_id,
                target,
                has_next_page: deps.has_next_page,
                visible: false,
            });
        }
        previous.is_some() || self.watcher.is_some()
    }

    /// Applies a visibility report. Returns true exactly when the watched
    /// item entered the viewport and more pages were known to exist when the
    /// watcher was attached.
    pub fn on_intersection(&mut self, watcher: WatcherId, is_intersecting: bool) -> bool {
        let Some(current) = self.watcher.as_mut().filter(|w| w.id == watcher) else {
            return false;
        };
        let entered = is_intersecting && !current.visible;
        current.visible = is_intersecting;
        entered && current.has_next_page
    }

    /// Detaches the current watcher, if any.
    pub fn release(&mut self) -> Option<Watcher> {
        self.watcher.take()
    }

    pub fn watcher(&self) -> Option<&Watcher> {
        self.watcher.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE_MORE: LoaderDeps = LoaderDeps {
        has_next_page: true,
        is_fetching: false,
    };

    #[test]
    fn identical_bind_keeps_watcher() {
        let mut loader = VisibilityLoader::new();
        assert!(loader.bind(Some(5), IDLE_MORE));
        let first = *loader.watcher().unwrap();
        assert!(!loader.bind(Some(5), IDLE_MORE));
        assert_eq!(loader.watcher(), Some(&first));
    }

    #[test]
    fn dependency_change_rebinds_same_item() {
        let mut loader = VisibilityLoader::new();
        loader.bind(Some(5), IDLE_MORE);
        let first = loader.watcher().unwrap().id();

        let no_more = LoaderDeps {
            has_next_page: false,
            is_fetching: false,
        };
        assert!(loader.bind(Some(5), no_more));
        let second = loader.watcher().unwrap();
        assert_ne!(second.id(), first);
        assert_eq!(second.target(), 5);
        assert!(!loader.on_intersection(second.id(), true));
        assert!(!loader.on_intersection(first, true));
    }

    #[test]
    fn empty_list_detaches() {
        let mut loader = VisibilityLoader::new();
        loader.bind(Some(5), IDLE_MORE);
        assert!(loader.bind(None, IDLE_MORE));
        assert!(loader.watcher().is_none());
    }

    #[test]
    fn bind_while_fetching_keeps_old_watcher() {
        let mut loader = VisibilityLoader::new();
        loader.bind(Some(5), IDLE_MORE);
        let id = loader.watcher().unwrap().id();
        let fetching = LoaderDeps {
            has_next_page: true,
            is_fetching: true,
        };
        assert!(!loader.bind(Some(3), fetching));
        assert_eq!(loader.watcher().unwrap().id(), id);
        assert_eq!(loader.watcher().unwrap().target(), 5);
    }

    #[test]
    fn report_for_detached_watcher_is_ignored() {
        let mut loader = VisibilityLoader::new();
        loader.bind(Some(5), IDLE_MORE);
        let old = loader.watcher().unwrap().id();
        loader.bind(Some(10), IDLE_MORE);
        assert!(!loader.on_intersection(old, true));
    }

    #[test]
    fn leaving_view_is_ignored_and_reentry_triggers_again() {
        let mut loader = VisibilityLoader::new();
        loader.bind(Some(5), IDLE_MORE);
        let id = loader.watcher().unwrap().id();
        assert!(loader.on_intersection(id, true));
        assert!(!loader.on_intersection(id, true));
        assert!(!loader.on_intersection(id, false));
        assert!(loader.on_intersection(id, true));
    }

    #[test]
    fn watcher_without_more_pages_never_triggers() {
        let mut loader = VisibilityLoader::new();
        loader.bind(
            Some(5),
            LoaderDeps {
                has_next_page: false,
                is_fetching: false,
            },
        );
        let id = loader.watcher().unwrap().id();
        assert!(!loader.on_intersection(id, true));
        assert!(loader.watcher().unwrap().is_visible());
    }
}
