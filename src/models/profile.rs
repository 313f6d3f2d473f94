use serde::{Deserialize, Deserializer, Serialize};

/// Unidades preferidas; cualquier valor desconocido se trata como km
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Km,
    Mi,
}

impl Units {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("mi") {
            Units::Mi
        } else {
            Units::Km
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Km => "km",
            Units::Mi => "mi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Units::Km => "Kilómetros",
            Units::Mi => "Millas",
        }
    }
}

impl<'de> Deserialize<'de> for Units {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Units::parse).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub routes_created: u32,
    #[serde(default)]
    pub routes_completed: u32,
    #[serde(default)]
    pub routes_favorites: u32,
}

/// Perfil del usuario (`/users/me/profile` y respuesta de `PATCH /users/me`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub preferred_units: Units,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub stats: ProfileStats,
}

impl Profile {
    pub fn extras(&self) -> ProfileExtras {
        ProfileExtras {
            phone: self.phone.clone().unwrap_or_default(),
            avatar_url: self.avatar_url.clone().unwrap_or_default(),
            units: self.preferred_units,
        }
    }

    /// Aplica campos editables cacheados sin tocar identidad ni métricas
    pub fn with_extras(mut self, extras: &ProfileExtras) -> Self {
        self.phone = Some(extras.phone.clone()).filter(|p| !p.is_empty());
        self.avatar_url = Some(extras.avatar_url.clone()).filter(|a| !a.is_empty());
        self.preferred_units = extras.units;
        self
    }
}

/// Cuerpo de `PATCH /users/me`; solo viajan los campos presentes
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_units: Option<Units>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.preferred_units.is_none() && self.avatar_url.is_none()
    }
}

/// Campos editables del perfil, cacheados en localStorage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileExtras {
    #[serde(default)]
    pub phone: String,
    #[serde(default, alias = "avatarUrl")]
    pub avatar_url: String,
    #[serde(default)]
    pub units: Units,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_units_fall_back_to_km() {
        let extras: ProfileExtras =
            serde_json::from_str(r#"{"phone": "600", "avatarUrl": "", "units": "leagues"}"#).unwrap();
        assert_eq!(extras.units, Units::Km);
        assert_eq!(extras.phone, "600");

        let extras: ProfileExtras = serde_json::from_str(r#"{"units": "mi"}"#).unwrap();
        assert_eq!(extras.units, Units::Mi);
    }

    #[test]
    fn profile_decodes_with_partial_stats() {
        let json = r#"{
            "id": "u1", "username": "ana", "email": "ana@rex.es",
            "preferred_units": null,
            "stats": {"routes_created": 4}
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.preferred_units, Units::Km);
        assert_eq!(profile.stats.routes_created, 4);
        assert_eq!(profile.stats.routes_favorites, 0);
    }

    #[test]
    fn update_serializes_only_present_fields() {
        let update = ProfileUpdate {
            phone: Some("+34 600 000 000".to_string()),
            ..ProfileUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"phone": "+34 600 000 000"}));
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn extras_roundtrip_through_profile() {
        let extras = ProfileExtras {
            phone: String::new(),
            avatar_url: "data:image/png;base64,AAA".to_string(),
            units: Units::Mi,
        };
        let profile = Profile::default().with_extras(&extras);
        assert_eq!(profile.phone, None);
        assert_eq!(profile.extras(), extras);
    }
}
