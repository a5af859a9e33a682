//! Utilidades genéricas compartidas por el resto del pipeline.

/// Concatena perezosamente una secuencia de secuencias, preservando el orden
/// externo e interno. Es de una sola pasada: los elementos se extraen bajo
/// demanda, por lo que también sirve para entradas infinitas consumidas de
/// forma incremental.
pub fn flatten<I>(outer: I) -> impl Iterator<Item = <I::Item as IntoIterator>::Item>
    where I: IntoIterator,
          I::Item: IntoIterator
{
    outer.into_iter().flatten()
}

/// Devuelve `value` sin cambios. Solo fija el tipo estático en el punto de
/// llamada; no hay conversión en tiempo de ejecución.
#[inline]
pub fn identity_cast<T>(value: T) -> T {
    value
}
