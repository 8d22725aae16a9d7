//! C++ `enum class` header rendering

use crate::catalog::EntityCatalog;
use crate::normalize::to_identifier;

/// Default name of the generated enum type
pub const DEFAULT_ENUM_NAME: &str = "EntityType";

const GENERATED_BANNER: &str = "// This file is generated. Do not edit manually.";

/// One enum member and the catalog entry it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub entity: String,
    pub identifier: String,
}

/// An enum type listing every catalog entity in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityEnum {
    pub name: String,
    pub members: Vec<EnumMember>,
}

impl EntityEnum {
    /// Build the enum from a catalog, normalizing each entity name
    pub fn from_catalog(name: impl Into<String>, catalog: &EntityCatalog) -> Self {
        let members = catalog
            .iter()
            .map(|entity| EnumMember {
                entity: entity.to_string(),
                identifier: to_identifier(entity),
            })
            .collect();

        Self {
            name: name.into(),
            members,
        }
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Render the full header text.
    ///
    /// Every entry carries a trailing comma, including the last one, which C++
    /// accepts in enumerator lists. An enum without members keeps the blank
    /// line between its braces.
    pub fn render(&self) -> String {
        let entries: Vec<String> = self
            .identifiers()
            .map(|identifier| format!("    {},", identifier))
            .collect();

        let mut header = String::new();
        header.push_str(GENERATED_BANNER);
        header.push('\n');
        header.push_str("#pragma once\n\n");
        header.push_str(&format!("enum class {} {{\n", self.name));
        header.push_str(&entries.join("\n"));
        header.push_str("\n};\n");
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_members_in_catalog_order() {
        let catalog = EntityCatalog::new(["Main Character", "NPC-Guard", "Boss #1"]);
        let entity_enum = EntityEnum::from_catalog(DEFAULT_ENUM_NAME, &catalog);

        assert_eq!(
            entity_enum.render(),
            "// This file is generated. Do not edit manually.\n\
             #pragma once\n\
             \n\
             enum class EntityType {\n\
             \x20   main_character,\n\
             \x20   npcguard,\n\
             \x20   boss_1,\n\
             };\n"
        );
    }

    #[test]
    fn test_render_empty_enum() {
        let entity_enum = EntityEnum::from_catalog(DEFAULT_ENUM_NAME, &EntityCatalog::default());

        assert!(entity_enum.is_empty());
        assert_eq!(
            entity_enum.render(),
            "// This file is generated. Do not edit manually.\n#pragma once\n\nenum class EntityType {\n\n};\n"
        );
    }

    #[test]
    fn test_render_custom_enum_name() {
        let catalog = EntityCatalog::new(["Torch"]);
        let code = EntityEnum::from_catalog("ItemKind", &catalog).render();

        assert!(code.contains("enum class ItemKind {\n    torch,\n};\n"));
    }

    #[test]
    fn test_members_remember_source_entity() {
        let catalog = EntityCatalog::new(["Cave Bear"]);
        let entity_enum = EntityEnum::from_catalog(DEFAULT_ENUM_NAME, &catalog);

        assert_eq!(
            entity_enum.members,
            vec![EnumMember {
                entity: "Cave Bear".to_string(),
                identifier: "cave_bear".to_string(),
            }]
        );
    }
}
