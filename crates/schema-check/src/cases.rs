//! Named schemas exercised by the check benchmark.

use schema_algebra::{partial, Options, Schema, SchemaError, S};

use crate::bench::Case;

fn vector3() -> Result<Schema, SchemaError> {
    S.Object([("x", S.num()), ("y", S.num()), ("z", S.num())], None)
}

fn box3d() -> Result<Schema, SchemaError> {
    S.Object(
        [
            ("scale", vector3()?),
            ("position", vector3()?),
            ("rotate", vector3()?),
            ("pivot", vector3()?),
        ],
        None,
    )
}

fn record(options: Option<Options>) -> Result<Schema, SchemaError> {
    let deeply_nested = S.Object(
        [
            ("a", S.str()),
            ("b", S.num()),
            ("c", S.bool()),
        ],
        None,
    )?;
    S.Object(
        [
            ("number", S.num()),
            ("negNumber", S.Number(Some(Options::new().with("maximum", -1)))),
            ("maxNumber", S.Number(Some(Options::new().with("minimum", 1000)))),
            ("string", S.str()),
            ("longString", S.String(Some(Options::new().with("minLength", 32)))),
            ("boolean", S.bool()),
            ("deeplyNested", deeply_nested),
        ],
        options,
    )
}

fn tree() -> Result<Schema, SchemaError> {
    S.recursive(|this| S.Object([("id", S.str()), ("nodes", S.Array(this, None))], None))
}

/// Every benchmark case, in run order.
pub fn all() -> Result<Vec<Case>, SchemaError> {
    let closed = Options::new().with("additionalProperties", false);
    Ok(vec![
        Case::new("Literal_String", S.Literal("hello", None)),
        Case::new("Literal_Number", S.Literal(1, None)),
        Case::new("Literal_Boolean", S.Literal(true, None)),
        Case::new("Primitive_Number", S.num()),
        Case::new("Primitive_Integer", S.int()),
        Case::new("Primitive_String", S.str()),
        Case::new("Primitive_Boolean", S.bool()),
        Case::new("Primitive_Null", S.null()),
        Case::new("Object_Unconstrained", record(None)?),
        Case::new("Object_Constrained", record(Some(closed))?),
        Case::new("Object_Vector3", vector3()?),
        Case::new("Object_Box3D", box3d()?),
        Case::new("Object_Recursive", tree()?),
        Case::new(
            "Object_Intersect",
            S.Intersect(
                vec![
                    S.Object([("x", S.num())], None)?,
                    S.Object([("y", S.str())], None)?,
                ],
                None,
            ),
        ),
        Case::new("Array_Number", S.Array(S.num(), None)),
        Case::new("Array_Object_Vector3", S.Array(vector3()?, None)),
        Case::new("Partial_Object", partial(&box3d()?, None)?),
        Case::new(
            "Partial_Union",
            partial(&S.Union(vec![vector3()?, box3d()?], None), None)?,
        ),
        Case::new("Partial_Recursive", partial(&tree()?, None)?),
    ])
}
