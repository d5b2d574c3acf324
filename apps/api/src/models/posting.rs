use serde::{Deserialize, Deserializer, Serialize};

/// One company's ATS endpoint, as listed in the matcher profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyTarget {
    pub board: String,
    pub slug: String,
}

impl CompanyTarget {
    pub fn new(board: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            slug: slug.into(),
        }
    }
}

/// Record shape returned by the ATS proxy. Any field may be missing or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyJob {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

/// A normalized job posting. `score` stays `None` until ranking runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub location: String,
    pub url: String,
    pub description: String,
    pub company_slug: String,
    pub board: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl JobPosting {
    /// Maps a proxy record onto a posting for `target`. The proxy never
    /// supplies a description.
    pub fn from_proxy(job: ProxyJob, target: &CompanyTarget) -> Self {
        Self {
            title: job.title,
            location: job.location,
            url: job.link,
            description: String::new(),
            company_slug: target.slug.clone(),
            board: target.board.clone(),
            score: None,
        }
    }

    /// Lower-cased `title location description`, the text every rubric
    /// rule matches against.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.location, self.description).to_lowercase()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proxy_job_tolerates_missing_and_null_fields() {
        let jobs: Vec<ProxyJob> = serde_json::from_value(json!([
            { "title": "Firmware Engineer", "location": null },
            { "link": "https://example.com/2" }
        ]))
        .unwrap();

        assert_eq!(jobs[0].title, "Firmware Engineer");
        assert_eq!(jobs[0].location, "");
        assert_eq!(jobs[0].link, "");
        assert_eq!(jobs[1].title, "");
        assert_eq!(jobs[1].link, "https://example.com/2");
    }

    #[test]
    fn test_from_proxy_fills_company_fields_and_empty_description() {
        let target = CompanyTarget::new("lever", "clearpath-robotics");
        let posting = JobPosting::from_proxy(
            ProxyJob {
                title: "Robotics Engineer".to_string(),
                location: "Kitchener".to_string(),
                link: "https://jobs.lever.co/clearpath/1".to_string(),
            },
            &target,
        );

        assert_eq!(posting.url, "https://jobs.lever.co/clearpath/1");
        assert_eq!(posting.description, "");
        assert_eq!(posting.company_slug, "clearpath-robotics");
        assert_eq!(posting.board, "lever");
        assert_eq!(posting.score, None);
    }

    #[test]
    fn test_serializes_camel_case_and_omits_missing_score() {
        let target = CompanyTarget::new("ashby", "draganfly");
        let mut posting = JobPosting::from_proxy(ProxyJob::default(), &target);
        let value = serde_json::to_value(&posting).unwrap();
        assert_eq!(value["companySlug"], "draganfly");
        assert!(value.get("score").is_none());

        posting.score = Some(7);
        let value = serde_json::to_value(&posting).unwrap();
        assert_eq!(value["score"], 7);
    }

    #[test]
    fn test_search_text_is_lowercase_and_space_joined() {
        let posting = JobPosting {
            title: "UAV Pilot".to_string(),
            location: "Québec".to_string(),
            url: String::new(),
            description: "R&D".to_string(),
            company_slug: String::new(),
            board: String::new(),
            score: None,
        };
        assert_eq!(posting.search_text(), "uav pilot québec r&d");
    }
}
