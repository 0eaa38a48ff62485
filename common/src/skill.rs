//! スキル選択状態

use serde::{Deserialize, Serialize};

pub const SKILL_PROMPT: &str = "Click an icon to learn more!";

/// 装飾画像の回転角の範囲（度）
pub const MAX_ROTATION: i32 = 30;

/// `[0, 1)` の乱数を `[-30, 30]` の整数角度に変換
pub fn rotation_from_unit(unit: f64) -> i32 {
    let span = (2 * MAX_ROTATION + 1) as f64;
    let offset = (unit.clamp(0.0, 1.0) * span).floor() as i32;
    offset.min(2 * MAX_ROTATION) - MAX_ROTATION
}

/// 選択中のスキル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSelection {
    pub name: Option<String>,
    pub description: String,
    pub rotation: i32,
}

impl Default for SkillSelection {
    fn default() -> Self {
        Self {
            name: None,
            description: SKILL_PROMPT.to_string(),
            rotation: 0,
        }
    }
}

impl SkillSelection {
    pub fn select(&mut self, name: &str, description: &str, rotation: i32) {
        self.name = Some(name.to_string());
        self.description = description.to_string();
        self.rotation = rotation.clamp(-MAX_ROTATION, MAX_ROTATION);
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_range() {
        assert_eq!(rotation_from_unit(0.0), -30);
        assert_eq!(rotation_from_unit(0.5), 0);
        assert_eq!(rotation_from_unit(0.999_999), 30);
        assert_eq!(rotation_from_unit(1.0), 30);
        for i in 0..1000 {
            let r = rotation_from_unit(i as f64 / 1000.0);
            assert!((-30..=30).contains(&r));
        }
    }

    #[test]
    fn test_default_prompt() {
        let selection = SkillSelection::default();
        assert_eq!(selection.name, None);
        assert_eq!(selection.description, SKILL_PROMPT);
        assert!(!selection.is_active("rust"));
    }

    #[test]
    fn test_select() {
        let mut selection = SkillSelection::default();
        selection.select("rust", "Systems language", 12);
        assert!(selection.is_active("rust"));
        assert!(!selection.is_active("go"));
        assert_eq!(selection.description, "Systems language");
        assert_eq!(selection.rotation, 12);

        selection.select("go", "Services", 90);
        assert_eq!(selection.rotation, 30);
    }
}
