//! Attribute mixins for vertices and edges
//!
//! An attribute is a small value holder implementing [`Mixin`]. Every mixin
//! names a `Kind`, a zero-sized marker that identifies the attribute
//! independently of the value type it carries (`Weight<u32>` and `Weight<f64>`
//! are both of kind [`WeightKind`]).
//!
//! An attribute set is any type implementing [`Holds<K>`] once for every kind
//! it carries, plus [`AttrSet`] for printing. The [`compose!`](crate::compose)
//! macro generates both from a struct declaration whose fields name their
//! kind (`weight: Weight<u32> => WeightKind`), and each built-in mixin is an
//! attribute set on its own.
//!
//! Accessors resolve by kind, never by position:
//!
//! ```
//! use attrgraph::{
//!     compose, HasResources, HasWeight, Resources, ResourcesKind, UnitSet, Weight, WeightKind,
//! };
//!
//! compose! {
//!     #[derive(Debug, Clone)]
//!     pub struct Link {
//!         units: Resources<UnitSet> => ResourcesKind,
//!         weight: Weight<u32> => WeightKind,
//!     }
//! }
//!
//! let mut link = Link::new(Resources(UnitSet::from_range(1..5)), Weight(2));
//! *link.weight_mut() += 1;
//! assert_eq!(*link.weight(), 3);
//! assert!(link.resources().contains(4));
//! ```
//!
//! Reading an attribute the set does not carry does not build:
//!
//! ```compile_fail
//! use attrgraph::{HasWeight, Name};
//!
//! let name = Name::new("v0");
//! let _ = name.weight();
//! ```
//!
//! Neither does composing the same kind twice:
//!
//! ```compile_fail
//! use attrgraph::{compose, Weight, WeightKind};
//!
//! compose! {
//!     pub struct Twice {
//!         cost: Weight<u32> => WeightKind,
//!         length: Weight<f64> => WeightKind,
//!     }
//! }
//! ```
//!
//! Nor does filing a mixin under a kind it does not have:
//!
//! ```compile_fail
//! use attrgraph::{compose, NameKind, Weight};
//!
//! compose! {
//!     pub struct Mislabeled {
//!         cost: Weight<u32> => NameKind,
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind marker for [`Name`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameKind;

/// Kind marker for [`Weight`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightKind;

/// Kind marker for [`Resources`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourcesKind;

/// A single attribute value holder
pub trait Mixin {
    /// Marker naming the attribute
    type Kind;

    /// The carried value
    type Value: fmt::Debug;

    /// Label used when printing, e.g. `weight`
    const LABEL: &'static str;

    fn get(&self) -> &Self::Value;

    fn get_mut(&mut self) -> &mut Self::Value;

    /// Write `label = value`
    fn write(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?}", Self::LABEL, self.get())
    }
}

/// An attribute set carrying the attribute of kind `K`
///
/// Implemented at most once per kind for any type, which is what makes
/// composing the same kind twice a build error.
pub trait Holds<K> {
    type Mixin: Mixin<Kind = K>;

    fn mixin(&self) -> &Self::Mixin;

    fn mixin_mut(&mut self) -> &mut Self::Mixin;
}

/// A printable set of attributes
pub trait AttrSet {
    /// Attribute labels in composition order
    const LABELS: &'static [&'static str];

    /// Write every attribute as `label = value`, comma separated, in
    /// composition order
    fn write_attrs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl AttrSet for () {
    const LABELS: &'static [&'static str] = &[];

    fn write_attrs(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// Read the attribute of kind `K`
///
/// Works for any mixin, including user-defined ones without a dedicated
/// accessor trait: `attr::<CostKind, _>(&edge)`.
pub fn attr<'a, K, T>(holder: &'a T) -> &'a <<T as Holds<K>>::Mixin as Mixin>::Value
where
    T: Holds<K> + ?Sized,
    <T as Holds<K>>::Mixin: 'a,
{
    <T as Holds<K>>::mixin(holder).get()
}

/// Mutable counterpart of [`attr`]
pub fn attr_mut<'a, K, T>(holder: &'a mut T) -> &'a mut <<T as Holds<K>>::Mixin as Mixin>::Value
where
    T: Holds<K> + ?Sized,
    <T as Holds<K>>::Mixin: 'a,
{
    <T as Holds<K>>::mixin_mut(holder).get_mut()
}

/// Display name of a vertex or edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name(name.to_string())
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name(name)
    }
}

impl Mixin for Name {
    type Kind = NameKind;
    type Value = String;
    const LABEL: &'static str = "name";

    fn get(&self) -> &String {
        &self.0
    }

    fn get_mut(&mut self) -> &mut String {
        &mut self.0
    }

    fn write(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", Self::LABEL, self.0)
    }
}

/// Weight or cost of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Weight<W>(pub W);

impl<W: fmt::Debug> Mixin for Weight<W> {
    type Kind = WeightKind;
    type Value = W;
    const LABEL: &'static str = "weight";

    fn get(&self) -> &W {
        &self.0
    }

    fn get_mut(&mut self) -> &mut W {
        &mut self.0
    }
}

/// Resources available on an edge, typically a [`UnitSet`](crate::UnitSet)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Resources<R>(pub R);

impl<R: fmt::Debug> Mixin for Resources<R> {
    type Kind = ResourcesKind;
    type Value = R;
    const LABEL: &'static str = "resources";

    fn get(&self) -> &R {
        &self.0
    }

    fn get_mut(&mut self) -> &mut R {
        &mut self.0
    }
}

// A lone mixin is an attribute set of one.
macro_rules! single_mixin_set {
    ($kind:ty, [$($g:ident),*], $ty:ty) => {
        impl<$($g: fmt::Debug),*> Holds<$kind> for $ty {
            type Mixin = Self;

            fn mixin(&self) -> &Self {
                self
            }

            fn mixin_mut(&mut self) -> &mut Self {
                self
            }
        }

        impl<$($g: fmt::Debug),*> AttrSet for $ty {
            const LABELS: &'static [&'static str] = &[<Self as Mixin>::LABEL];

            fn write_attrs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Mixin::write(self, f)
            }
        }
    };
}

single_mixin_set!(NameKind, [], Name);
single_mixin_set!(WeightKind, [W], Weight<W>);
single_mixin_set!(ResourcesKind, [R], Resources<R>);

macro_rules! accessor {
    (
        $(#[$meta:meta])*
        $trait:ident, $kind:ty, $assoc:ident, $get:ident, $get_mut:ident, $set:ident
    ) => {
        $(#[$meta])*
        pub trait $trait {
            type $assoc;

            fn $get(&self) -> &Self::$assoc;

            fn $get_mut(&mut self) -> &mut Self::$assoc;

            /// Replace the value, returning the previous one
            fn $set(&mut self, value: Self::$assoc) -> Self::$assoc {
                std::mem::replace(self.$get_mut(), value)
            }
        }

        impl<T: Holds<$kind> + ?Sized> $trait for T {
            type $assoc = <<T as Holds<$kind>>::Mixin as Mixin>::Value;

            fn $get(&self) -> &Self::$assoc {
                <T as Holds<$kind>>::mixin(self).get()
            }

            fn $get_mut(&mut self) -> &mut Self::$assoc {
                <T as Holds<$kind>>::mixin_mut(self).get_mut()
            }
        }
    };
}

accessor!(
    /// Anything carrying a [`Name`]
    HasName, NameKind, Name, name, name_mut, set_name
);
accessor!(
    /// Anything carrying a [`Weight`]
    HasWeight, WeightKind, Weight, weight, weight_mut, set_weight
);
accessor!(
    /// Anything carrying [`Resources`]
    HasResources, ResourcesKind, Resources, resources, resources_mut, set_resources
);

/// Declare a struct composed of attribute mixins
///
/// Every field is written `field: Mixin => Kind`. The macro generates the
/// struct, a `new` constructor taking the mixins in declaration order, one
/// [`Holds<Kind>`](Holds) impl per field and an [`AttrSet`] impl printing the
/// fields in declaration order. Field order never affects accessor
/// resolution. A kind that does not match its mixin, or a kind used twice,
/// does not build.
///
/// ```
/// use attrgraph::{compose, AttrSet, HasName, HasWeight, Name, NameKind, Weight, WeightKind};
///
/// compose! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Road {
///         name: Name => NameKind,
///         length: Weight<f64> => WeightKind,
///     }
/// }
///
/// let road = Road::new(Name::new("A1"), Weight(12.5));
/// assert_eq!(road.name(), "A1");
/// assert_eq!(*road.weight(), 12.5);
/// assert_eq!(Road::LABELS, &["name", "weight"]);
/// ```
#[macro_export]
macro_rules! compose {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident : $mixin:ty => $kind:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($(#[$fmeta])* $fvis $field: $mixin,)+
        }

        impl $name {
            #[allow(dead_code, clippy::too_many_arguments)]
            $vis fn new($($field: $mixin),+) -> Self {
                Self { $($field),+ }
            }
        }

        $(
            impl $crate::Holds<$kind> for $name {
                type Mixin = $mixin;

                fn mixin(&self) -> &$mixin {
                    &self.$field
                }

                fn mixin_mut(&mut self) -> &mut $mixin {
                    &mut self.$field
                }
            }
        )+

        impl $crate::AttrSet for $name {
            const LABELS: &'static [&'static str] =
                &[$(<$mixin as $crate::Mixin>::LABEL),+];

            #[allow(unused_assignments)]
            fn write_attrs(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut first = true;
                $(
                    if !first {
                        f.write_str(", ")?;
                    }
                    $crate::Mixin::write(&self.$field, f)?;
                    first = false;
                )+
                Ok(())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitSet;

    crate::compose! {
        #[derive(Debug, Clone, PartialEq)]
        struct Link {
            weight: Weight<i32> => WeightKind,
            units: Resources<UnitSet> => ResourcesKind,
        }
    }

    // Same attributes, opposite order
    crate::compose! {
        #[derive(Debug, Clone, PartialEq)]
        struct ReversedLink {
            units: Resources<UnitSet> => ResourcesKind,
            weight: Weight<i32> => WeightKind,
        }
    }

    /// Renders an attribute set the way vertices and edges do
    struct Show<'a, T>(&'a T);

    impl<T: AttrSet> fmt::Display for Show<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.write_attrs(f)
        }
    }

    #[test]
    fn test_single_mixins() {
        let mut weight = Weight(7u8);
        assert_eq!(*weight.weight(), 7);
        *weight.weight_mut() = 9;
        assert_eq!(weight.0, 9);

        let name = Name::new("v0");
        assert_eq!(name.name(), "v0");

        let res = Resources(UnitSet::from_range(0..3));
        assert_eq!(res.resources().len(), 3);
    }

    #[test]
    fn test_composed_accessors() {
        let mut link = Link::new(Weight(2), Resources(UnitSet::from_range(1..5)));
        assert_eq!(*link.weight(), 2);
        assert!(link.resources().contains(1));
        assert!(!link.resources().contains(5));

        let old = link.set_weight(10);
        assert_eq!(old, 2);
        assert_eq!(*link.weight(), 10);

        link.resources_mut().remove(1);
        assert_eq!(link.resources().len(), 3);
    }

    #[test]
    fn test_order_independent_resolution() {
        let a = Link::new(Weight(4), Resources(UnitSet::from_range(0..2)));
        let b = ReversedLink::new(Resources(UnitSet::from_range(0..2)), Weight(4));

        assert_eq!(a.weight(), b.weight());
        assert_eq!(a.resources(), b.resources());
    }

    #[test]
    fn test_printing_follows_composition_order() {
        let a = Link::new(Weight(2), Resources(UnitSet::from_range(1..3)));
        let b = ReversedLink::new(Resources(UnitSet::from_range(1..3)), Weight(2));

        assert_eq!(Show(&a).to_string(), "weight = 2, resources = {1, 2}");
        assert_eq!(Show(&b).to_string(), "resources = {1, 2}, weight = 2");
        assert_eq!(Link::LABELS, &["weight", "resources"]);
        assert_eq!(ReversedLink::LABELS, &["resources", "weight"]);
    }

    #[test]
    fn test_name_prints_unquoted() {
        assert_eq!(Show(&Name::new("v3")).to_string(), "name = v3");
        assert_eq!(Show(&()).to_string(), "");
    }

    #[test]
    fn test_generic_attr_lookup() {
        let mut link = Link::new(Weight(1), Resources(UnitSet::new()));
        assert_eq!(*attr::<WeightKind, _>(&link), 1);

        attr_mut::<ResourcesKind, _>(&mut link).insert(8);
        assert!(link.resources().contains(8));
    }

    #[test]
    fn test_user_defined_mixin() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct LatencyKind;

        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Latency(f64);

        impl Mixin for Latency {
            type Kind = LatencyKind;
            type Value = f64;
            const LABEL: &'static str = "latency";

            fn get(&self) -> &f64 {
                &self.0
            }

            fn get_mut(&mut self) -> &mut f64 {
                &mut self.0
            }
        }

        crate::compose! {
            struct Hop {
                latency: Latency => LatencyKind,
                weight: Weight<u32> => WeightKind,
            }
        }

        let hop = Hop::new(Latency(0.5), Weight(3));
        assert_eq!(*attr::<LatencyKind, _>(&hop), 0.5);
        assert_eq!(*hop.weight(), 3);
        assert_eq!(Show(&hop).to_string(), "latency = 0.5, weight = 3");
    }
}
