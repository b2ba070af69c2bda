use holocron_schema::SwapiPerson;
use serde::{Deserialize, Serialize};

/// Upsert payload for the `characters` table. Carries no `favorite` flag:
/// imports never change it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterCreate {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl From<&SwapiPerson> for CharacterCreate {
    fn from(p: &SwapiPerson) -> Self {
        Self {
            name: p.name.clone(),
            height: Some(p.height.clone()),
            mass: Some(p.mass.clone()),
            hair_color: Some(p.hair_color.clone()),
            skin_color: Some(p.skin_color.clone()),
            eye_color: Some(p.eye_color.clone()),
            birth_year: Some(p.birth_year.clone()),
            gender: Some(p.gender.clone()),
        }
    }
}
