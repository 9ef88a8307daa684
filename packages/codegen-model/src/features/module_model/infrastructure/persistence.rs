//! Persistence-context shape detection
//!
//! Purely structural: a target is a context when it, or an ancestor within
//! the depth limit, carries a configured context type name. Mapping
//! correctness is not checked.

use super::super::domain::RecordCollectionModel;
use crate::config::PersistenceConfig;
use crate::features::declaration_result::Maybe;
use crate::shared::models::{Declaration, TypeRef};
use crate::shared::ports::DeclarationHost;

pub struct PersistenceDetector<'a> {
    host: &'a dyn DeclarationHost,
    rules: &'a PersistenceConfig,
}

impl<'a> PersistenceDetector<'a> {
    pub fn new(host: &'a dyn DeclarationHost, rules: &'a PersistenceConfig) -> Self {
        Self { host, rules }
    }

    /// Walk the base-class chain from `target`
    ///
    /// Ancestors the host cannot resolve end the walk, but their names are
    /// still checked.
    pub fn is_context(&self, target: &Declaration) -> bool {
        if self.rules.is_context_type(&target.name) {
            return true;
        }

        let mut next: Maybe<TypeRef> = target.base_class().cloned();
        for _ in 0..self.rules.ancestor_depth_limit {
            let Some(ancestor) = next.into_option() else {
                return false;
            };
            if self.rules.is_context_type(&ancestor.name) {
                return true;
            }
            next = self
                .host
                .resolve_type(&ancestor)
                .and_then(|decl| decl.base_class().cloned());
        }
        false
    }

    /// Readable properties shaped like a single-argument record collection
    pub fn record_collections(&self, target: &Declaration) -> Vec<RecordCollectionModel> {
        target
            .readable_properties()
            .filter(|p| self.rules.is_collection_type(&p.ty.name))
            .filter(|p| p.ty.type_args.len() == 1 && !p.ty.has_unresolved_args())
            .filter_map(|p| {
                p.ty.type_arg(0)
                    .map(|element| RecordCollectionModel {
                        property_name: p.name.clone(),
                        element_type: element.clone(),
                    })
                    .into_option()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::DeclarationSnapshot;
    use crate::shared::models::{PropertyDecl, TypeKind};

    fn db_set(element: &str) -> TypeRef {
        TypeRef::generic("DbSet", TypeKind::Class, vec![TypeRef::class(element)])
    }

    fn snapshot() -> DeclarationSnapshot {
        DeclarationSnapshot::new(vec![
            Declaration::builder("App.Data.BaseContext")
                .base_type(TypeRef::class("DbContext"))
                .build(),
            Declaration::builder("App.Data.ShopContext")
                .base_type(TypeRef::class("BaseContext").with_namespace("App.Data"))
                .property(PropertyDecl::new("Orders", db_set("Order")))
                .property(PropertyDecl::new("Customers", db_set("Customer")))
                .property(PropertyDecl::new("Name", TypeRef::class("string")))
                .property(PropertyDecl::new("Hidden", db_set("Secret")).write_only())
                .build(),
            Declaration::builder("App.Clock").build(),
        ])
        .unwrap()
    }

    #[test]
    fn test_context_found_through_ancestor_chain() {
        let snapshot = snapshot();
        let rules = PersistenceConfig::default();
        let detector = PersistenceDetector::new(&snapshot, &rules);

        let shop = snapshot.get("App.Data.ShopContext").unwrap();
        assert!(detector.is_context(shop));
        assert!(!detector.is_context(snapshot.get("App.Clock").unwrap()));
    }

    #[test]
    fn test_depth_limit_stops_walk() {
        let snapshot = snapshot();
        let rules = PersistenceConfig {
            ancestor_depth_limit: 1,
            ..PersistenceConfig::default()
        };
        let detector = PersistenceDetector::new(&snapshot, &rules);

        // DbContext is two levels above ShopContext
        assert!(!detector.is_context(snapshot.get("App.Data.ShopContext").unwrap()));
        assert!(detector.is_context(snapshot.get("App.Data.BaseContext").unwrap()));
    }

    #[test]
    fn test_record_collections_in_declaration_order() {
        let snapshot = snapshot();
        let rules = PersistenceConfig::default();
        let detector = PersistenceDetector::new(&snapshot, &rules);

        let collections = detector.record_collections(snapshot.get("App.Data.ShopContext").unwrap());
        let names: Vec<_> = collections.iter().map(|c| c.property_name.as_str()).collect();
        assert_eq!(names, vec!["Orders", "Customers"]);
        assert_eq!(collections[0].element_type.name, "Order");
    }
}
