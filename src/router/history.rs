use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::RouterError;
use super::table::{RouteMatch, RouteTable};

/// Where a navigation should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A browser URL, including the history base
    Path(String),
    /// A route addressed by name
    Named {
        name: String,
        params: BTreeMap<String, String>,
    },
}

impl NavigationTarget {
    pub fn path(url: impl Into<String>) -> Self {
        NavigationTarget::Path(url.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        NavigationTarget::Named {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            NavigationTarget::Named { name, mut params } => {
                params.insert(key.into(), value.into());
                NavigationTarget::Named { name, params }
            }
            path => path,
        }
    }
}

/// A resolved entry in the history stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub href: String,
    pub route: RouteMatch,
}

/// A navigation that has been resolved but not yet committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub id: u64,
    pub replace: bool,
    pub entry: HistoryEntry,
}

/// Single-threaded navigation state over an immutable route table
///
/// Every navigation resolves synchronously. A failed navigation leaves the
/// history untouched, and beginning a navigation supersedes any other that
/// is still pending.
#[derive(Debug)]
pub struct Navigator {
    table: Arc<RouteTable>,
    entries: Vec<HistoryEntry>,
    index: usize,
    pending: Option<u64>,
    next_id: u64,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, initial_url: &str) -> Result<Self, RouterError> {
        let entry = resolve_target(&table, &NavigationTarget::path(initial_url))?;
        Ok(Self {
            table,
            entries: vec![entry],
            index: 0,
            pending: None,
            next_id: 1,
        })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn push(&mut self, target: NavigationTarget) -> Result<&HistoryEntry, RouterError> {
        let pending = self.begin(target, false)?;
        self.commit(pending)
    }

    pub fn replace(&mut self, target: NavigationTarget) -> Result<&HistoryEntry, RouterError> {
        let pending = self.begin(target, true)?;
        self.commit(pending)
    }

    /// Resolve a navigation without applying it. Any earlier pending navigation is superseded.
    pub fn begin(
        &mut self,
        target: NavigationTarget,
        replace: bool,
    ) -> Result<PendingNavigation, RouterError> {
        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(id);

        match resolve_target(&self.table, &target) {
            Ok(entry) => Ok(PendingNavigation { id, replace, entry }),
            Err(err) => {
                self.pending = None;
                tracing::warn!("Navigation {} failed: {}", id, err);
                Err(err)
            }
        }
    }

    pub fn commit(&mut self, pending: PendingNavigation) -> Result<&HistoryEntry, RouterError> {
        if self.pending != Some(pending.id) {
            tracing::debug!("Dropping superseded navigation {}", pending.id);
            return Err(RouterError::Superseded(pending.id));
        }
        self.pending = None;

        tracing::info!(
            "Navigated to {} (route '{}')",
            pending.entry.href,
            pending.entry.route.name
        );

        if pending.replace {
            self.entries[self.index] = pending.entry;
        } else {
            self.entries.truncate(self.index + 1);
            self.entries.push(pending.entry);
            self.index += 1;
        }
        Ok(self.current())
    }

    /// Drop the pending navigation, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn back(&mut self) -> Option<&HistoryEntry> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        self.go(1)
    }

    /// Move `delta` entries through history; out-of-range moves do nothing
    pub fn go(&mut self, delta: isize) -> Option<&HistoryEntry> {
        let target = self.index.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.pending = None;
        self.index = target;
        Some(self.current())
    }
}

fn resolve_target(
    table: &RouteTable,
    target: &NavigationTarget,
) -> Result<HistoryEntry, RouterError> {
    let href = match target {
        NavigationTarget::Path(url) => url.clone(),
        NavigationTarget::Named { name, params } => table.href(name, params)?,
    };
    let route = table.resolve(&href).into_match()?;
    Ok(HistoryEntry { href, route })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::quizdom::{QUIZ_ID, names, route_table};
    use crate::router::view::View;

    fn navigator() -> Navigator {
        Navigator::new(Arc::new(route_table().unwrap()), "/").unwrap()
    }

    #[test]
    fn test_initial_location() {
        let nav = navigator();
        assert_eq!(nav.current().route.view, View::Home);
        assert_eq!(nav.len(), 1);
        assert!(!nav.can_go_back());

        let err = Navigator::new(Arc::new(route_table().unwrap()), "/missing").unwrap_err();
        assert_eq!(err, RouterError::NotFound("/missing".to_string()));
    }

    #[test]
    fn test_push_by_path_and_name() {
        let mut nav = navigator();
        nav.push(NavigationTarget::path("/login")).unwrap();
        assert_eq!(nav.current().route.name, names::LOGIN);

        let entry = nav
            .push(NavigationTarget::named(names::START_QUIZ).with_param(QUIZ_ID, "8"))
            .unwrap();
        assert_eq!(entry.href, "/start_quiz/8");
        assert_eq!(entry.route.param(QUIZ_ID), Some("8"));
        assert_eq!(nav.len(), 3);
    }

    #[test]
    fn test_failed_navigation_keeps_history() {
        let mut nav = navigator();
        nav.push(NavigationTarget::path("/user")).unwrap();

        assert!(matches!(
            nav.push(NavigationTarget::path("/nope")),
            Err(RouterError::NotFound(_))
        ));
        assert!(matches!(
            nav.push(NavigationTarget::named(names::ADD_QUESTION)),
            Err(RouterError::MissingParam { .. })
        ));
        assert!(matches!(
            nav.push(NavigationTarget::named("nope")),
            Err(RouterError::UnknownRoute(_))
        ));

        assert_eq!(nav.len(), 2);
        assert_eq!(nav.current().route.name, names::USER);
    }

    #[test]
    fn test_back_forward_and_truncation() {
        let mut nav = navigator();
        nav.push(NavigationTarget::path("/login")).unwrap();
        nav.push(NavigationTarget::path("/user")).unwrap();

        assert_eq!(nav.back().unwrap().route.name, names::LOGIN);
        assert_eq!(nav.back().unwrap().route.name, names::HOME);
        assert!(nav.back().is_none());
        assert_eq!(nav.forward().unwrap().route.name, names::LOGIN);

        // Pushing from the middle of history discards the forward entries
        nav.push(NavigationTarget::path("/signup")).unwrap();
        assert!(!nav.can_go_forward());
        assert_eq!(nav.len(), 3);
        assert!(nav.go(5).is_none());
        assert_eq!(nav.go(-2).unwrap().route.name, names::HOME);
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut nav = navigator();
        nav.push(NavigationTarget::path("/login")).unwrap();
        nav.replace(NavigationTarget::path("/admin")).unwrap();
        assert_eq!(nav.len(), 2);
        assert_eq!(nav.current().route.view, View::Admin);
        assert_eq!(nav.back().unwrap().route.view, View::Home);
    }

    #[test]
    fn test_newer_navigation_supersedes_pending() {
        let mut nav = navigator();
        let first = nav.begin(NavigationTarget::path("/login"), false).unwrap();
        let second = nav.begin(NavigationTarget::path("/signup"), false).unwrap();

        assert_eq!(
            nav.commit(first.clone()).unwrap_err(),
            RouterError::Superseded(first.id)
        );
        assert_eq!(nav.current().route.name, names::HOME);

        nav.commit(second).unwrap();
        assert_eq!(nav.current().route.name, names::SIGNUP);
        assert_eq!(nav.len(), 2);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut nav = navigator();
        let pending = nav.begin(NavigationTarget::path("/login"), false).unwrap();
        nav.cancel();
        assert!(matches!(nav.commit(pending), Err(RouterError::Superseded(_))));
        assert_eq!(nav.len(), 1);
    }

    #[test]
    fn test_relative_path_navigation_is_not_found() {
        let mut nav = navigator();
        for url in ["login", "start_quiz/5"] {
            assert_eq!(
                nav.push(NavigationTarget::path(url)).unwrap_err(),
                RouterError::NotFound(url.to_string())
            );
        }
        assert_eq!(nav.len(), 1);
        assert_eq!(nav.current().route.name, names::HOME);

        let err = Navigator::new(Arc::new(route_table().unwrap()), "login").unwrap_err();
        assert_eq!(err, RouterError::NotFound("login".to_string()));
    }

    #[test]
    fn test_navigation_respects_base() {
        let table = route_table().unwrap().with_base("/quizdom").unwrap();
        let mut nav = Navigator::new(Arc::new(table), "/quizdom/").unwrap();
        let entry = nav
            .push(NavigationTarget::named(names::VIEW_QUESTIONS).with_param(QUIZ_ID, "3"))
            .unwrap();
        assert_eq!(entry.href, "/quizdom/view_questions/3");
        assert_eq!(entry.route.path, "/view_questions/3");
    }
}
