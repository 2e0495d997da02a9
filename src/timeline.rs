use crate::content::EducationEntry;

/// Which milestone is open and whether its project list is fully shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineState {
    active: Option<usize>,
    expanded: bool,
}

impl TimelineState {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Opening another milestone, or closing the current one, collapses the project list.
    pub fn toggle(&mut self, index: usize) {
        self.active = if self.is_active(index) {
            None
        } else {
            Some(index)
        };
        self.expanded = false;
    }

    pub fn toggle_projects(&mut self) {
        self.expanded = !self.expanded;
    }

    /// How many of `total` projects to render for the open milestone.
    pub fn visible_projects(&self, total: usize) -> usize {
        if self.expanded {
            total
        } else {
            total.min(1)
        }
    }
}

/// Hidden project count plus the key/fallback for its noun, or `None` when nothing is hidden.
pub fn more_projects(state: &TimelineState, total: usize) -> Option<(usize, &'static str, &'static str)> {
    let hidden = total - state.visible_projects(total);
    match hidden {
        0 => None,
        1 => Some((1, "common.moreProject", "more project")),
        n => Some((n, "common.moreProjects", "more projects")),
    }
}

/// Heading for an education entry's achievement list: a pure certification track gets its own.
pub fn achievements_heading(entry: &EducationEntry) -> (&'static str, &'static str) {
    if entry.courses.is_empty() && !entry.certificates.is_empty() {
        ("common.certifications", "Certifications")
    } else {
        ("common.keyAchievements", "Key Achievements")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::CONTENT,
        i18n::{Language, DICTIONARY},
    };

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut state = TimelineState::default();
        state.toggle(2);
        assert!(state.is_active(2));
        state.toggle(0);
        assert_eq!(state.active(), Some(0));
        state.toggle(0);
        assert_eq!(state.active(), None);
    }

    #[test]
    fn test_switching_collapses_projects() {
        let mut state = TimelineState::default();
        state.toggle(1);
        state.toggle_projects();
        assert!(state.expanded());
        assert_eq!(state.visible_projects(3), 3);

        state.toggle(2);
        assert!(!state.expanded());
        assert_eq!(state.visible_projects(3), 1);
    }

    #[test]
    fn test_more_projects_label() {
        let mut state = TimelineState::default();
        assert_eq!(more_projects(&state, 0), None);
        assert_eq!(more_projects(&state, 1), None);
        assert_eq!(more_projects(&state, 2), Some((1, "common.moreProject", "more project")));
        assert_eq!(
            more_projects(&state, 3),
            Some((2, "common.moreProjects", "more projects"))
        );
        state.toggle_projects();
        assert_eq!(more_projects(&state, 3), None);
    }

    #[test]
    fn test_achievements_heading() {
        let headings: Vec<_> = CONTENT
            .education
            .iter()
            .map(|entry| achievements_heading(entry).0)
            .collect();
        assert_eq!(
            headings,
            [
                "common.keyAchievements",
                "common.keyAchievements",
                "common.certifications"
            ]
        );
    }

    #[test]
    fn test_timeline_keys_are_translated() {
        let keys = [
            "common.moreProject",
            "common.moreProjects",
            "common.certifications",
            "common.keyAchievements",
            "common.keyCourses",
            "common.keyProjects",
            "common.certificates",
            "common.showMore",
            "common.showLess",
            "common.team",
        ];
        for key in keys {
            for language in Language::ALL {
                assert!(DICTIONARY.lookup(key, language).is_some(), "{key} / {language}");
            }
        }
    }
}
