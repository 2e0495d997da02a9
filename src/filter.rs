use std::cmp::Ordering;

use crate::content::{Project, Skill, SkillCategory, SkillLevel};

/// Adds `value` when absent, removes it when present.
pub fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(i) = values.iter().position(|v| *v == value) {
        values.remove(i);
    } else {
        values.push(value);
    }
}

/// Distinct values in first-seen order.
fn unique<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillFilter {
    pub search: String,
    pub levels: Vec<SkillLevel>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCategory<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub skills: Vec<&'a Skill>,
}

impl SkillFilter {
    pub fn toggle_level(&mut self, level: SkillLevel) {
        toggle(&mut self.levels, level);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag.to_string());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active_count(&self) -> usize {
        self.levels.len() + self.tags.len() + usize::from(!self.search.trim().is_empty())
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        let query = self.search.trim().to_lowercase();
        let matches_search = query.is_empty()
            || skill.name.to_lowercase().contains(&query)
            || skill.description.to_lowercase().contains(&query)
            || skill.tags.iter().any(|t| t.to_lowercase().contains(&query));
        let matches_level = self.levels.is_empty() || self.levels.contains(&skill.level);
        let matches_tags = self.tags.is_empty() || self.tags.iter().any(|t| skill.tags.contains(t));

        matches_search && matches_level && matches_tags
    }

    /// Matching skills grouped by category; categories left empty are dropped.
    pub fn apply<'a>(&self, categories: &'a [SkillCategory]) -> Vec<FilteredCategory<'a>> {
        categories
            .iter()
            .filter_map(|c| {
                let skills = c.skills.iter().filter(|s| self.matches(s)).collect::<Vec<_>>();
                if skills.is_empty() {
                    None
                } else {
                    Some(FilteredCategory {
                        id: &c.id,
                        label: &c.label,
                        skills,
                    })
                }
            })
            .collect()
    }
}

/// Keeps `selected` when it still has matches, otherwise moves to the first non-empty category.
pub fn select_category<'a>(filtered: &[FilteredCategory<'a>], selected: &str) -> Option<&'a str> {
    filtered
        .iter()
        .find(|c| c.id == selected)
        .or_else(|| filtered.first())
        .map(|c| c.id)
}

pub fn skill_tags(categories: &[SkillCategory]) -> Vec<String> {
    unique(
        categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .flat_map(|s| s.tags.iter()),
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Title,
    Category,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOption {
    /// Same field flips the direction; a new field starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flip();
        } else {
            *self = Self {
                field,
                direction: SortDirection::Ascending,
            };
        }
    }

    fn key<'a>(&self, project: &'a Project) -> &'a str {
        match self.field {
            SortField::Title => &project.title,
            SortField::Category => &project.category,
        }
    }

    pub fn compare(&self, a: &Project, b: &Project) -> Ordering {
        let ord = collate(self.key(a), self.key(b));
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Case-insensitive ordering with a case-sensitive tie break.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
    pub sort: SortOption,
}

impl ProjectFilter {
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category.to_string());
    }

    pub fn toggle_technology(&mut self, technology: &str) {
        toggle(&mut self.technologies, technology.to_string());
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.technologies.clear();
    }

    pub fn active_count(&self) -> usize {
        self.categories.len() + self.technologies.len()
    }

    pub fn matches(&self, project: &Project) -> bool {
        let matches_category =
            self.categories.is_empty() || self.categories.contains(&project.category);
        let matches_tech = self.technologies.is_empty()
            || project
                .technologies
                .iter()
                .any(|t| self.technologies.contains(t));
        matches_category && matches_tech
    }

    /// Filtered, stably sorted view; the source slice is left untouched.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let mut out = projects.iter().filter(|p| self.matches(p)).collect::<Vec<_>>();
        out.sort_by(|a, b| self.sort.compare(a, b));
        out
    }
}

pub fn project_categories(projects: &[Project]) -> Vec<String> {
    unique(projects.iter().map(|p| &p.category))
}

pub fn project_technologies(projects: &[Project]) -> Vec<String> {
    unique(projects.iter().flat_map(|p| p.technologies.iter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn skill(name: &str, level: SkillLevel, tags: &[&str]) -> Skill {
        Skill {
            name: name.to_string(),
            description: format!("{name} description"),
            icon: String::new(),
            level,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn categories() -> Vec<SkillCategory> {
        vec![
            SkillCategory {
                id: "programming".to_string(),
                label: "Programming".to_string(),
                skills: vec![
                    skill("Rust", SkillLevel::Advanced, &["systems", "Python"]),
                    skill("Go", SkillLevel::Intermediate, &["backend"]),
                ],
            },
            SkillCategory {
                id: "ml".to_string(),
                label: "ML".to_string(),
                skills: vec![
                    skill("PyTorch", SkillLevel::Advanced, &["ml", "Python"]),
                    skill("Pandas", SkillLevel::Expert, &["data", "Python"]),
                    skill("R", SkillLevel::Beginner, &["data"]),
                ],
            },
            SkillCategory {
                id: "cloud".to_string(),
                label: "Cloud".to_string(),
                skills: vec![skill("GCP", SkillLevel::Expert, &["cloud"])],
            },
        ]
    }

    fn project(id: u32, title: &str, category: &str, tech: &[&str]) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            screenshots: vec![],
            category: category.to_string(),
            technologies: tech.iter().map(|t| t.to_string()).collect(),
            github: None,
            demo: None,
        }
    }

    fn projects() -> Vec<Project> {
        vec![
            project(1, "beta", "Web", &["Python", "Flask"]),
            project(2, "Alpha", "ML", &["Python", "NumPy"]),
            project(3, "gamma", "Web", &["Java"]),
            project(4, "Delta", "ML", &["TensorFlow"]),
            project(5, "alpha", "Web", &["Rust"]),
        ]
    }

    fn names<'a>(filtered: &[FilteredCategory<'a>]) -> Vec<&'a str> {
        filtered
            .iter()
            .flat_map(|c| c.skills.iter().copied().map(|s| s.name.as_str()))
            .collect()
    }

    #[test]
    fn test_tag_filter_python_ignores_selected_tab() {
        let cats = categories();
        let mut filter = SkillFilter::default();
        filter.toggle_tag("Python");

        let filtered = filter.apply(&cats);
        assert_eq!(names(&filtered), vec!["Rust", "PyTorch", "Pandas"]);
        // the result is computed over every category, the tab only picks what is shown
        assert_eq!(select_category(&filtered, "cloud"), Some("programming"));
        assert_eq!(select_category(&filtered, "ml"), Some("ml"));
    }

    #[test]
    fn test_filter_is_and_across_or_within() {
        let cats = categories();
        let mut filter = SkillFilter::default();
        filter.toggle_tag("Python");
        filter.toggle_tag("data");
        assert_eq!(names(&filter.apply(&cats)), vec!["Rust", "PyTorch", "Pandas", "R"]);

        filter.toggle_level(SkillLevel::Expert);
        assert_eq!(names(&filter.apply(&cats)), vec!["Pandas"]);

        filter.toggle_level(SkillLevel::Beginner);
        assert_eq!(names(&filter.apply(&cats)), vec!["Pandas", "R"]);

        filter.search = "PAN".to_string();
        assert_eq!(names(&filter.apply(&cats)), vec!["Pandas"]);
        assert_eq!(filter.active_count(), 5);
    }

    #[test]
    fn test_filter_exact_subset() {
        let cats = categories();
        let mut filter = SkillFilter::default();
        filter.toggle_level(SkillLevel::Advanced);
        filter.search = "py".to_string();

        let kept = names(&filter.apply(&cats));
        for skill in cats.iter().flat_map(|c| c.skills.iter()) {
            assert_eq!(kept.contains(&skill.name.as_str()), filter.matches(skill));
        }
        assert_eq!(kept, vec!["Rust", "PyTorch"]);
    }

    #[test]
    fn test_search_matches_description_and_tags() {
        let cats = categories();
        let filter = SkillFilter {
            search: "go description".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&cats)), vec!["Go"]);

        let filter = SkillFilter {
            search: "clo".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&cats)), vec!["GCP"]);
    }

    #[test]
    fn test_empty_categories_dropped_and_no_match() {
        let cats = categories();
        let mut filter = SkillFilter::default();
        filter.toggle_tag("cloud");
        let filtered = filter.apply(&cats);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "cloud");

        filter.search = "nothing like this".to_string();
        let filtered = filter.apply(&cats);
        assert!(filtered.is_empty());
        assert_eq!(select_category(&filtered, "cloud"), None);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut filter = SkillFilter::default();
        filter.toggle_tag("ml");
        filter.toggle_tag("data");
        filter.toggle_tag("ml");
        assert_eq!(filter.tags, vec!["data".to_string()]);
        filter.search = "x".to_string();
        filter.clear();
        assert_eq!(filter, SkillFilter::default());
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn test_source_not_mutated() {
        let cats = categories();
        let before = cats.clone();
        let mut filter = SkillFilter::default();
        filter.toggle_level(SkillLevel::Expert);
        let _ = filter.apply(&cats);
        assert_eq!(cats, before);

        let items = projects();
        let before = items.clone();
        let mut pf = ProjectFilter::default();
        pf.sort.toggle(SortField::Title);
        let _ = pf.apply(&items);
        assert_eq!(items, before);
    }

    #[test]
    fn test_project_filters() {
        let items = projects();
        let mut filter = ProjectFilter::default();
        filter.toggle_category("Web");
        filter.toggle_technology("Python");
        filter.toggle_technology("Rust");
        let ids = filter.apply(&items).iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![5, 1]);
        assert_eq!(filter.active_count(), 3);

        filter.clear();
        assert_eq!(filter.apply(&items).len(), items.len());
    }

    #[test]
    fn test_project_sort_toggle() {
        let mut sort = SortOption::default();
        sort.toggle(SortField::Title);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle(SortField::Category);
        assert_eq!(
            sort,
            SortOption {
                field: SortField::Category,
                direction: SortDirection::Ascending
            }
        );
    }

    #[test]
    fn test_project_sort_is_stable_and_idempotent() {
        let items = projects();
        let mut filter = ProjectFilter::default();
        filter.sort.toggle(SortField::Category);

        let once = filter.apply(&items);
        // equal categories keep source order
        let ids = once.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 4, 1, 3, 5]);

        let owned = once.into_iter().cloned().collect::<Vec<_>>();
        let twice = filter.apply(&owned).iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(twice, ids);

        filter.sort.toggle(SortField::Category);
        let desc = filter.apply(&items).iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(desc, vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let items = projects();
        let filter = ProjectFilter::default();
        let titles = filter
            .apply(&items)
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Alpha", "alpha", "beta", "Delta", "gamma"]);
    }

    #[test]
    fn test_unique_values_from_content() {
        let content = Content::load().unwrap();
        let cats = project_categories(&content.projects);
        assert_eq!(cats.first().map(String::as_str), Some("Academic Project - Web App"));
        let mut dedup = cats.clone();
        dedup.dedup();
        assert_eq!(dedup, cats);

        let techs = project_technologies(&content.projects);
        assert_eq!(techs.iter().filter(|t| *t == "Python").count(), 1);

        let tags = skill_tags(&content.skills);
        assert!(tags.contains(&"database".to_string()));
        assert_eq!(tags.iter().filter(|t| *t == "data").count(), 1);
    }
}
