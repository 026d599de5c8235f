#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator used in skill category keys, shown as a display delimiter.
const CATEGORY_SEPARATOR: char = '_';
const CATEGORY_DELIMITER: &str = " & ";

/// Root profile document. Loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub basics: Basics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Skills,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications: Option<Vec<Publication>>,
    /// Top-level fields the renderer does not consume.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Basics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Link {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullet_pool: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dates: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullet_pool: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dates: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub venue: String,
    /// Accepts `2024` or `"2024"`.
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Skill categories in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skills(Vec<SkillCategory>);

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// A borrowed view of one top-level field of the profile.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Section<'a> {
    Basics(&'a Basics),
    Summary(&'a [String]),
    Skills(&'a Skills),
    Projects(&'a [Project]),
    WorkExperience(&'a [Experience]),
    Education(&'a [Education]),
    Publications(&'a [Publication]),
    Other(&'a Value),
}

impl Profile {
    /// Returns the named top-level field, or `None` when the document has no such field.
    pub fn section(&self, name: &str) -> Option<Section<'_>> {
        match name {
            "basics" => Some(Section::Basics(&self.basics)),
            "summary" => Some(Section::Summary(&self.summary)),
            "skills" => Some(Section::Skills(&self.skills)),
            "projects" => Some(Section::Projects(&self.projects)),
            "work_experience" => Some(Section::WorkExperience(&self.work_experience)),
            "education" => Some(Section::Education(&self.education)),
            "publications" => self.publications.as_deref().map(Section::Publications),
            other => self.extra.get(other).map(Section::Other),
        }
    }

    /// First entry of `summary`, used as the hero tagline.
    pub fn tagline(&self) -> Option<&str> {
        self.summary.first().map(String::as_str)
    }

    /// First project whose title contains `marker`, in document order.
    pub fn featured_project(&self, marker: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.is_featured(marker))
    }

    /// Publications, treating an absent list as empty.
    pub fn publications(&self) -> &[Publication] {
        self.publications.as_deref().unwrap_or_default()
    }
}

impl Basics {
    /// URL of the first link with exactly this label.
    pub fn link(&self, label: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.url.as_str())
    }
}

impl Project {
    pub fn is_featured(&self, marker: &str) -> bool {
        self.title.contains(marker)
    }

    /// First link pointing at GitHub.
    pub fn code_link(&self) -> Option<&str> {
        self.links
            .iter()
            .map(String::as_str)
            .find(|l| l.contains("github"))
    }

    /// First link not pointing at GitHub.
    pub fn live_link(&self) -> Option<&str> {
        self.links
            .iter()
            .map(String::as_str)
            .find(|l| !l.contains("github"))
    }

    pub fn first_bullet(&self) -> Option<&str> {
        self.bullet_pool.first().map(String::as_str)
    }
}

impl Skills {
    pub fn iter(&self) -> impl Iterator<Item = &SkillCategory> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<SkillCategory>> for Skills {
    fn from(categories: Vec<SkillCategory>) -> Self {
        Skills(categories)
    }
}

impl SkillCategory {
    /// `Languages_Frameworks` becomes `Languages & Frameworks`.
    pub fn display_name(&self) -> String {
        self.name.replace(CATEGORY_SEPARATOR, CATEGORY_DELIMITER)
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = Skills;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill category to skill list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Skills, A::Error> {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, items)) =
                    access.next_entry::<String, Option<Vec<String>>>()?
                {
                    categories.push(SkillCategory {
                        name,
                        items: items.unwrap_or_default(),
                    });
                }
                Ok(Skills(categories))
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(de::Error::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"a string or number",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skills_preserve_document_order() {
        let profile: Profile = serde_json::from_str(
            r#"{"skills": {"Zeta": ["a"], "Alpha_Beta": ["b", "c"], "Mid": []}}"#,
        )
        .unwrap();
        let names: Vec<&str> = profile.skills.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha_Beta", "Mid"]);
    }

    #[test]
    fn test_skill_display_name_substitutes_separator() {
        let category = SkillCategory {
            name: "ML_Data_Science".to_string(),
            items: vec![],
        };
        assert_eq!(category.display_name(), "ML & Data & Science");
    }

    #[test]
    fn test_missing_fields_default() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert!(profile.basics.links.is_empty());
        assert!(profile.summary.is_empty());
        assert!(profile.publications.is_none());
        assert_eq!(profile.tagline(), None);
    }

    #[test]
    fn test_null_sequences_default() {
        let profile: Profile =
            serde_json::from_str(r#"{"summary": null, "projects": [{"title": "x", "tags": null}]}"#)
                .unwrap();
        assert!(profile.summary.is_empty());
        assert!(profile.projects[0].tags.is_empty());
    }

    #[test]
    fn test_null_text_fields_default() {
        let profile: Profile = serde_json::from_value(json!({
            "basics": {"name": "A", "links": [{"label": "GitHub", "url": null}]},
            "work_experience": [{"role": "Dev", "location": null}],
            "education": [{"degree": null, "school": "MIT", "dates": null}],
            "publications": [{"author_position": null, "title": "T", "venue": null}]
        }))
        .unwrap();
        assert_eq!(profile.basics.links[0].url, "");
        assert_eq!(profile.basics.link("GitHub"), Some(""));
        assert_eq!(profile.work_experience[0].role, "Dev");
        assert_eq!(profile.work_experience[0].location, "");
        assert_eq!(profile.education[0].school, "MIT");
        assert_eq!(profile.education[0].dates, "");
        assert_eq!(profile.publications()[0].venue, "");
    }

    #[test]
    fn test_publication_year_accepts_number_or_string() {
        let profile: Profile = serde_json::from_value(json!({
            "publications": [{"title": "A", "year": 2024}, {"title": "B", "year": "2023"}]
        }))
        .unwrap();
        assert_eq!(profile.publications()[0].year, "2024");
        assert_eq!(profile.publications()[1].year, "2023");
    }

    #[test]
    fn test_code_and_live_link_first_match() {
        let project = Project {
            links: vec![
                "https://demo.example.com".to_string(),
                "https://github.com/a/first".to_string(),
                "https://github.com/a/second".to_string(),
                "https://docs.example.com".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(project.code_link(), Some("https://github.com/a/first"));
        assert_eq!(project.live_link(), Some("https://demo.example.com"));
    }

    #[test]
    fn test_featured_project_is_first_match() {
        let profile: Profile = serde_json::from_value(json!({
            "projects": [
                {"title": "Other"},
                {"title": "Stock_AI v1"},
                {"title": "Stock_AI v2"}
            ]
        }))
        .unwrap();
        let featured = profile.featured_project("Stock_AI").unwrap();
        assert_eq!(featured.title, "Stock_AI v1");
    }

    #[test]
    fn test_section_lookup() {
        let profile: Profile = serde_json::from_value(json!({
            "summary": ["hello"],
            "awards": ["Best Demo"]
        }))
        .unwrap();
        assert!(matches!(profile.section("summary"), Some(Section::Summary(s)) if s == ["hello"]));
        assert!(matches!(profile.section("awards"), Some(Section::Other(_))));
        assert!(profile.section("publications").is_none());
        assert!(profile.section("nope").is_none());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result = serde_json::from_str::<Profile>(r#"{"projects": "not a list"}"#);
        assert!(result.is_err());
    }
}
