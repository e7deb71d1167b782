//! Extension load: validate, assign, load resources, register.

use std::collections::BTreeMap;

use entity_defs::{EntityDef, LoaderError, LoaderErrorKind};
use tracing::{info, warn};

use super::DefRegistry;
use crate::handler::{CapacityRequest, DefHandler};

impl<H: DefHandler> DefRegistry<H> {
    /// Register a batch of extension definitions keyed by internal name.
    ///
    /// Definitions are processed in name order. A definition that fails its
    /// resource check gets no identifier; one that fails its resource load
    /// keeps the identifier it was given, which is retired. Either way the
    /// rest of the batch still loads, and every error is returned.
    ///
    /// The last identifier, `i32::MAX`, is never handed out: definitions that
    /// would need it are rejected with `TypeSpaceExhausted`.
    pub fn load(&mut self, batch: BTreeMap<String, H::Def>) -> Vec<LoaderError> {
        let mut errors = Vec::new();
        let validate = self.config.validates_resources();
        let first = self.next_type;
        let total = batch.len();
        let mut registered = 0usize;

        self.handler
            .extend_capacity(CapacityRequest::Additional(total));

        for (name, mut def) in batch {
            if self.config.reject_duplicate_names {
                if let Some(kind) = self.name_conflict(&name) {
                    warn!(name = %name, reason = %kind, "rejected extension definition");
                    errors.push(LoaderError::new(name, kind));
                    continue;
                }
            }
            def.set_internal_name(name.clone());

            if validate {
                let check_errors = self.handler.check_resources(&def);
                if !check_errors.is_empty() {
                    warn!(
                        name = %name,
                        errors = check_errors.len(),
                        "extension definition failed resource check"
                    );
                    errors.extend(check_errors);
                    continue;
                }
            }

            let ty = self.next_type;
            let Some(next) = ty.next() else {
                warn!(name = %name, cursor = %ty, "no identifiers left for extension definition");
                errors.push(LoaderError::new(name, LoaderErrorKind::TypeSpaceExhausted));
                continue;
            };
            def.set_entity_type(ty);
            self.next_type = next;

            if validate {
                let load_errors = self.handler.load_resources(&def);
                if !load_errors.is_empty() {
                    warn!(
                        name = %name,
                        retired = %ty,
                        errors = load_errors.len(),
                        "extension definition failed to load resources"
                    );
                    errors.extend(load_errors);
                    continue;
                }
            }

            self.handler.apply_defaults(&mut def);
            self.defs_by_type.insert(ty, def);
            self.extension_by_name.insert(name, ty);
            registered += 1;
        }

        info!(
            total,
            registered,
            failed = total - registered,
            first = %first,
            next = %self.next_type,
            "loaded extension definitions"
        );

        errors
    }

    fn name_conflict(&self, name: &str) -> Option<LoaderErrorKind> {
        if name.is_empty() {
            Some(LoaderErrorKind::EmptyName)
        } else if self.get_builtin(name).is_some() || self.extension_by_name.contains_key(name) {
            Some(LoaderErrorKind::DuplicateName)
        } else {
            None
        }
    }
}
