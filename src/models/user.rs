use serde::{Deserialize, Serialize};

/// Usuario autenticado (GitHub). Todos los campos son opcionales:
/// el backend puede omitir email o foto según los permisos concedidos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "avatar_url")]
    pub picture: Option<String>,
    /// Login de GitHub (solo presente en algunas versiones de `/auth/userinfo`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
}

impl User {
    /// Nombre para mostrar: name → login → email
    pub fn display_name(&self) -> Option<&str> {
        [&self.name, &self.login, &self.email]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    /// Completa los campos vacíos con los de `fallback` (los propios ganan)
    pub fn merged_with(self, fallback: User) -> User {
        User {
            name: non_empty(self.name).or_else(|| non_empty(fallback.name)),
            email: non_empty(self.email).or_else(|| non_empty(fallback.email)),
            picture: non_empty(self.picture).or_else(|| non_empty(fallback.picture)),
            login: non_empty(self.login).or_else(|| non_empty(fallback.login)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_name_then_login() {
        let user = User { name: Some("  ".into()), login: Some("octocat".into()), ..User::default() };
        assert_eq!(user.display_name(), Some("octocat"));
        assert_eq!(User::default().display_name(), None);
    }

    #[test]
    fn merge_keeps_own_fields() {
        let verified = User { name: Some("Bob Smith".into()), ..User::default() };
        let from_url = User {
            name: Some("Bob".into()),
            email: Some("bob@example.com".into()),
            ..User::default()
        };
        let merged = verified.merged_with(from_url);
        assert_eq!(merged.name.as_deref(), Some("Bob Smith"));
        assert_eq!(merged.email.as_deref(), Some("bob@example.com"));
        assert_eq!(merged.picture, None);
    }

    #[test]
    fn accepts_github_avatar_field() {
        let user: User = serde_json::from_str(r#"{"login":"octocat","avatar_url":"https://x/y.png"}"#).unwrap();
        assert_eq!(user.picture.as_deref(), Some("https://x/y.png"));
        assert_eq!(user.name, None);
    }
}
