use crate::core::Job;

/// The active set of required tags. Insertion order is preserved for chip
/// display; membership is what filtering cares about.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    tags: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `tag` unless already present.
    pub fn add(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.iter().any(|t| *t == tag) {
            self.tags.push(tag);
        }
    }

    /// Removes `tag` if present.
    pub fn remove(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

/// Visibility predicate: an empty set shows everything, otherwise every
/// active tag must appear among the job's tags. Exact, case-sensitive match.
pub fn matches(job: &Job, filters: &FilterSet) -> bool {
    if filters.is_empty() {
        return true;
    }
    filters.iter().all(|f| job.has_tag(f))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(role: &str, level: &str, languages: &[&str], tools: &[&str]) -> Job {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "company": "Acme",
            "logo": "./images/acme.svg",
            "new": false,
            "featured": false,
            "position": format!("{} {}", level, role),
            "role": role,
            "level": level,
            "postedAt": "1w ago",
            "contract": "Full Time",
            "location": "Remote",
            "languages": languages,
            "tools": tools,
        }))
        .expect("test job should deserialize")
    }

    #[test]
    fn empty_filter_set_matches_every_job() {
        let filters = FilterSet::new();
        assert!(matches(&job("Frontend", "Senior", &["JavaScript"], &[]), &filters));
        assert!(matches(&job("Backend", "Junior", &[], &["RoR"]), &filters));
    }

    #[test]
    fn matches_iff_filters_are_a_subset_of_job_tags() {
        let j = job("Frontend", "Senior", &["JavaScript"], &["React"]);

        let mut filters = FilterSet::new();
        filters.add("Frontend");
        assert!(matches(&j, &filters));

        filters.add("React");
        assert!(matches(&j, &filters));

        filters.add("Backend");
        assert!(!matches(&j, &filters));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let j = job("Frontend", "Senior", &[], &[]);
        let mut filters = FilterSet::new();
        filters.add("frontend");
        assert!(!matches(&j, &filters));
    }

    #[test]
    fn add_is_idempotent() {
        let mut filters = FilterSet::new();
        filters.add("Frontend");
        filters.add("Frontend");
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn remove_of_absent_tag_is_a_no_op() {
        let mut filters = FilterSet::new();
        filters.add("Frontend");
        filters.remove("Backend");
        assert_eq!(filters.iter().collect::<Vec<_>>(), vec!["Frontend"]);
    }

    #[test]
    fn clear_empties_regardless_of_contents() {
        let mut filters = FilterSet::new();
        filters.add("Frontend");
        filters.add("Senior");
        filters.clear();
        assert!(filters.is_empty());

        filters.clear();
        assert!(filters.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved_for_display() {
        let mut filters = FilterSet::new();
        filters.add("Senior");
        filters.add("Frontend");
        filters.add("JavaScript");
        assert_eq!(
            filters.iter().collect::<Vec<_>>(),
            vec!["Senior", "Frontend", "JavaScript"]
        );
    }

    #[test]
    fn filtering_scenario_from_fetched_shape() {
        let jobs = vec![job("Frontend", "Senior", &["JavaScript"], &[])];

        let mut filters = FilterSet::new();
        filters.add("Frontend");
        let visible: Vec<&Job> = jobs.iter().filter(|j| matches(j, &filters)).collect();
        assert_eq!(visible.len(), 1);

        filters.add("Backend");
        assert!(jobs.iter().filter(|j| matches(j, &filters)).next().is_none());

        filters.clear();
        let visible: Vec<u32> =
            jobs.iter().filter(|j| matches(j, &filters)).map(|j| j.id).collect();
        assert_eq!(visible, vec![1]);
    }
}
