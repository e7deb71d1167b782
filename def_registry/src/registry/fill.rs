//! Built-in fill: one definition per canonical built-in identifier.

use std::collections::hash_map::Entry;

use entity_defs::{EntityDef, EntityType};
use tracing::{debug, trace, warn};

use super::DefRegistry;
use crate::handler::DefHandler;

impl<H: DefHandler> DefRegistry<H> {
    /// Register a definition for every built-in identifier in `[min, max)`.
    ///
    /// The sentinel identifier and slots whose canonical type has no name in
    /// the table are skipped. Does not move the cursor.
    ///
    /// The built-in name index is rebuilt from scratch. Filling again without
    /// a [`reset`](Self::reset) overwrites the built-in entries in place and
    /// runs `after_fill` again; extension entries are kept.
    pub fn fill_builtin(&mut self) {
        if !self.defs_by_type.is_empty() {
            debug!(
                existing = self.defs_by_type.len(),
                "filling built-in definitions over a non-empty registry"
            );
        }
        self.builtin_by_name.clear();
        let mut filled = 0usize;

        for id in EntityType::range(self.ids.min(), self.ids.max()) {
            if id.is_none() {
                continue;
            }

            let entity = self.handler.resolve_native(id);
            let mut def = self.handler.new_def_with_display_name(&entity);

            let regular = self.handler.regular_type(&entity);
            let name = match self.ids.name_of(regular) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => {
                    trace!(id = %id, regular = %regular, "no canonical built-in at slot");
                    continue;
                }
            };
            def.set_internal_name(name.clone());

            self.handler.copy_native_to_def(&entity, &mut def);

            def.set_entity_type(id);
            self.defs_by_type.insert(id, def);
            match self.builtin_by_name.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
                Entry::Occupied(slot) if *slot.get() != id => {
                    warn!(
                        name = %slot.key(),
                        first = %slot.get(),
                        duplicate = %id,
                        "built-in name registered twice, keeping first"
                    );
                }
                Entry::Occupied(_) => {}
            }
            filled += 1;
        }

        self.handler.after_fill(&mut self.defs_by_type);

        debug!(
            filled,
            min = %self.ids.min(),
            max = %self.ids.max(),
            "filled built-in definitions"
        );
    }
}
