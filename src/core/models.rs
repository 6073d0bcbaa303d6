use serde::Deserialize;

/// One listing record from the fetched document. Field names on the wire are
/// camelCase; `new` becomes `is_new` here. Nothing is derived or mutated
/// after deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: u32,
    pub company: String,
    pub logo: String,
    #[serde(rename = "new")]
    pub is_new: bool,
    pub featured: bool,
    pub position: String,
    pub role: String,
    pub level: String,
    pub posted_at: String,
    pub contract: String,
    pub location: String,
    pub languages: Vec<String>,
    pub tools: Vec<String>,
}

impl Job {
    /// All filterable tags in display order: role, level, languages, tools.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        [self.role.as_str(), self.level.as_str()]
            .into_iter()
            .chain(self.languages.iter().map(String::as_str))
            .chain(self.tools.iter().map(String::as_str))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }

    /// Maps the document-relative logo reference onto the served static
    /// path: a leading `./images` is stripped and `/images` prepended.
    pub fn logo_path(&self) -> String {
        format!("/images{}", self.logo.strip_prefix("./images").unwrap_or(&self.logo))
    }

    /// Initial used for the circular logo badge when no bitmap is bundled.
    pub fn logo_initial(&self) -> char {
        self.company.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Job {
        serde_json::from_str(
            r#"{
                "id": 1,
                "company": "Photosnap",
                "logo": "./images/photosnap.svg",
                "new": true,
                "featured": true,
                "position": "Senior Frontend Developer",
                "role": "Frontend",
                "level": "Senior",
                "postedAt": "1d ago",
                "contract": "Full Time",
                "location": "USA Only",
                "languages": ["HTML", "CSS", "JavaScript"],
                "tools": []
            }"#,
        )
        .expect("sample job should deserialize")
    }

    #[test]
    fn deserializes_camel_case_wire_format() {
        let job = sample();
        assert_eq!(job.id, 1);
        assert!(job.is_new);
        assert!(job.featured);
        assert_eq!(job.posted_at, "1d ago");
        assert_eq!(job.languages, vec!["HTML", "CSS", "JavaScript"]);
        assert!(job.tools.is_empty());
    }

    #[test]
    fn tags_keep_display_order() {
        let job = sample();
        let tags: Vec<&str> = job.tags().collect();
        assert_eq!(tags, vec!["Frontend", "Senior", "HTML", "CSS", "JavaScript"]);
    }

    #[test]
    fn has_tag_is_case_sensitive() {
        let job = sample();
        assert!(job.has_tag("Frontend"));
        assert!(!job.has_tag("frontend"));
    }

    #[test]
    fn logo_path_rewrites_relative_prefix() {
        let job = sample();
        assert_eq!(job.logo_path(), "/images/photosnap.svg");
    }

    #[test]
    fn logo_path_leaves_unprefixed_references_rooted() {
        let mut job = sample();
        job.logo = "/photosnap.svg".to_string();
        assert_eq!(job.logo_path(), "/images/photosnap.svg");
    }
}
