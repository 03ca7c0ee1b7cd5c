use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

/// Holds at most one value of every type.
#[derive(Debug, Default)]
pub struct TypeMap {
    values: HashMap<TypeId, Box<dyn Any>>,
}

impl TypeMap {
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values.get(&TypeId::of::<T>())?.downcast_ref()
    }

    /// Stores `value`, replacing a previously stored value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Box::new(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_value_per_type() {
        let mut map = TypeMap::default();
        assert_eq!(map.get::<u32>(), None);

        map.insert(1u32);
        map.insert("recipient");
        map.insert(2u32);

        assert_eq!(map.get::<u32>(), Some(&2));
        assert_eq!(map.get::<&str>(), Some(&"recipient"));
        assert_eq!(map.get::<u64>(), None);
    }
}
