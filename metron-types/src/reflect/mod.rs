//! Static reflection descriptors for external tooling.
//!
//! Every value type of the crate implements [`Reflect`], exposing its name, ordered list of fields
//! and ordered list of methods. Serialization layers, editors or debuggers can use the
//! descriptors to inspect and modify values without knowing the concrete types.
//!
//! ```
//! use metron_types::cartesian::Point2d;
//! use metron_types::reflect::Reflect;
//!
//! let mut point = Point2d::new(3.0, 4.0);
//! let descriptor = Point2d::DESCRIPTOR;
//!
//! assert_eq!(descriptor.name, "Point2");
//! assert_eq!(descriptor.get::<f64>(&point, "y"), Ok(&4.0));
//!
//! let length = descriptor.invoke(&mut point, "getLength", &[]).unwrap();
//! assert_eq!(length.downcast_ref::<f32>(), Some(&5.0));
//! ```

use std::any::Any;

use serde::Serialize;

use crate::error::MetronTypesError;

mod impls;

/// Type with a static reflection descriptor.
pub trait Reflect: Sized + 'static {
    /// Descriptor of the type.
    const DESCRIPTOR: TypeDescriptor<Self>;
}

/// Function invoking a reflected method on an object with type-erased arguments.
///
/// Argument count is checked by [`TypeDescriptor::invoke`] before the function is called.
pub type MethodFn<T> =
    fn(&mut T, &[&(dyn Any + 'static)]) -> Result<Box<dyn Any>, MetronTypesError>;

/// Name and ordered fields and methods of a type.
pub struct TypeDescriptor<T: 'static> {
    /// Name of the type, shared by all precisions, e.g. `Point2`.
    pub name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldDescriptor<T>],
    /// Methods in registration order.
    pub methods: &'static [MethodDescriptor<T>],
}

/// Accessor of a single field.
pub struct FieldDescriptor<T> {
    name: &'static str,
    get: fn(&T) -> &(dyn Any + 'static),
    get_mut: fn(&mut T) -> &mut (dyn Any + 'static),
}

/// Accessor of a single method.
pub struct MethodDescriptor<T> {
    name: &'static str,
    min_args: usize,
    max_args: usize,
    invoke: MethodFn<T>,
}

/// Serializable summary of a [`TypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSchema {
    /// Name of the type.
    pub name: &'static str,
    /// Field names in order.
    pub fields: Vec<&'static str>,
    /// Methods in order.
    pub methods: Vec<MethodSchema>,
}

/// Serializable summary of a [`MethodDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSchema {
    /// Name of the method.
    pub name: &'static str,
    /// Number of required arguments.
    pub min_args: usize,
    /// Number of accepted arguments, including optional ones.
    pub max_args: usize,
}

impl<T> FieldDescriptor<T> {
    /// Creates a new field accessor.
    pub const fn new(
        name: &'static str,
        get: fn(&T) -> &(dyn Any + 'static),
        get_mut: fn(&mut T) -> &mut (dyn Any + 'static),
    ) -> Self {
        Self { name, get, get_mut }
    }

    /// Name of the field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the value of the field of `object`.
    pub fn get<'a>(&self, object: &'a T) -> &'a (dyn Any + 'static) {
        (self.get)(object)
    }

    /// Returns mutable reference to the value of the field of `object`.
    pub fn get_mut<'a>(&self, object: &'a mut T) -> &'a mut (dyn Any + 'static) {
        (self.get_mut)(object)
    }
}

impl<T> MethodDescriptor<T> {
    /// Creates a new method accessor taking from `min_args` to `max_args` arguments.
    pub const fn new(
        name: &'static str,
        min_args: usize,
        max_args: usize,
        invoke: MethodFn<T>,
    ) -> Self {
        Self {
            name,
            min_args,
            max_args,
            invoke,
        }
    }

    /// Name of the method.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of required arguments.
    pub fn min_args(&self) -> usize {
        self.min_args
    }

    /// Number of accepted arguments.
    pub fn max_args(&self) -> usize {
        self.max_args
    }

    /// Calls the method on `object`, checking the number of arguments first.
    pub fn invoke(
        &self,
        object: &mut T,
        args: &[&(dyn Any + 'static)],
    ) -> Result<Box<dyn Any>, MetronTypesError> {
        if args.len() < self.min_args || args.len() > self.max_args {
            let expected = if self.min_args == self.max_args {
                self.min_args.to_string()
            } else {
                format!("{}..={}", self.min_args, self.max_args)
            };
            return Err(MetronTypesError::ArgumentCount {
                method: self.name,
                expected,
                found: args.len(),
            });
        }

        (self.invoke)(object, args)
    }
}

impl<T: 'static> TypeDescriptor<T> {
    /// Finds a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Finds a method by name.
    pub fn method(&self, name: &str) -> Option<&'static MethodDescriptor<T>> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Returns a reference to the value of the named field of `object`.
    pub fn get<'a, V: 'static>(
        &self,
        object: &'a T,
        name: &str,
    ) -> Result<&'a V, MetronTypesError> {
        let field = self.find_field(name)?;
        field
            .get(object)
            .downcast_ref()
            .ok_or(MetronTypesError::FieldType {
                type_name: self.name,
                field: field.name,
            })
    }

    /// Replaces the value of the named field of `object`.
    pub fn set<V: 'static>(
        &self,
        object: &mut T,
        name: &str,
        value: V,
    ) -> Result<(), MetronTypesError> {
        let field = self.find_field(name)?;
        let slot = field
            .get_mut(object)
            .downcast_mut::<V>()
            .ok_or(MetronTypesError::FieldType {
                type_name: self.name,
                field: field.name,
            })?;
        *slot = value;

        Ok(())
    }

    /// Calls the named method on `object`.
    ///
    /// The returned value must be downcast to the return type of the method. Methods that do not
    /// return anything return `()`.
    pub fn invoke(
        &self,
        object: &mut T,
        name: &str,
        args: &[&(dyn Any + 'static)],
    ) -> Result<Box<dyn Any>, MetronTypesError> {
        let Some(method) = self.method(name) else {
            log::debug!("Method {name} is not registered for {}", self.name);
            return Err(MetronTypesError::UnknownMethod {
                type_name: self.name,
                method: name.to_string(),
            });
        };

        method.invoke(object, args)
    }

    /// Returns serializable summary of the descriptor.
    pub fn schema(&self) -> TypeSchema {
        TypeSchema {
            name: self.name,
            fields: self.fields.iter().map(|field| field.name).collect(),
            methods: self
                .methods
                .iter()
                .map(|method| MethodSchema {
                    name: method.name,
                    min_args: method.min_args,
                    max_args: method.max_args,
                })
                .collect(),
        }
    }

    fn find_field(&self, name: &str) -> Result<&'static FieldDescriptor<T>, MetronTypesError> {
        self.field(name).ok_or_else(|| {
            log::debug!("Field {name} is not registered for {}", self.name);
            MetronTypesError::UnknownField {
                type_name: self.name,
                field: name.to_string(),
            }
        })
    }
}

/// Downcasts argument `index` of a reflected method call.
pub(crate) fn arg<'a, V: 'static>(
    method: &'static str,
    args: &[&'a (dyn Any + 'static)],
    index: usize,
) -> Result<&'a V, MetronTypesError> {
    args.get(index)
        .and_then(|arg| arg.downcast_ref())
        .ok_or(MetronTypesError::ArgumentType { method, index })
}
