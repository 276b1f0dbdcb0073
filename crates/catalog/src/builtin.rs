use quote_types::{Finish, FinishKind, Material, MaterialKind};

use crate::Catalog;

/// The catalog the storefront ships with, used until the backend answers.
pub fn builtin_catalog() -> Catalog {
    Catalog {
        materials: vec![
            Material {
                id: "pla-grey".to_string(),
                name: "PLA, grey".to_string(),
                kind: MaterialKind::Pla,
                density_g_cm3: 1.24,
                cost_per_gram: 0.15,
                color: "#9e9e9e".to_string(),
            },
            Material {
                id: "pla-black".to_string(),
                name: "PLA, black".to_string(),
                kind: MaterialKind::Pla,
                density_g_cm3: 1.24,
                cost_per_gram: 0.15,
                color: "#212121".to_string(),
            },
            Material {
                id: "petg-clear".to_string(),
                name: "PETG, clear".to_string(),
                kind: MaterialKind::Petg,
                density_g_cm3: 1.27,
                cost_per_gram: 0.18,
                color: "#e0f2f1".to_string(),
            },
            Material {
                id: "resin-standard".to_string(),
                name: "Standard resin".to_string(),
                kind: MaterialKind::Resin,
                density_g_cm3: 1.12,
                cost_per_gram: 0.3,
                color: "#ffe0b2".to_string(),
            },
        ],
        finishes: vec![
            Finish {
                id: "raw".to_string(),
                name: "As printed".to_string(),
                kind: FinishKind::Raw,
            },
            Finish {
                id: "primed".to_string(),
                name: "Sanded & primed".to_string(),
                kind: FinishKind::Primed,
            },
            Finish {
                id: "painted".to_string(),
                name: "Hand painted".to_string(),
                kind: FinishKind::Painted,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_resolve() {
        let catalog = builtin_catalog();
        assert!(catalog.material("pla-grey").is_some());
        assert!(catalog.material("resin-standard").is_some());
        assert!(catalog.finish("painted").is_some());
        assert!(catalog.material("abs-neon").is_none());
    }

    #[test]
    fn finish_kinds_cover_the_fixed_set() {
        let catalog = builtin_catalog();
        let kinds: Vec<FinishKind> = catalog.finishes.iter().map(|f| f.kind).collect();
        assert!(kinds.contains(&FinishKind::Raw));
        assert!(kinds.contains(&FinishKind::Primed));
        assert!(kinds.contains(&FinishKind::Painted));
    }
}
