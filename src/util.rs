use ndarray::ArrayBase;
use ndarray::ArrayViewD;
use ndarray::Data;
use ndarray::Dimension;
use ndarray::ErrorKind;
use ndarray::ShapeError;

/// Common shape of two arrays under numpy broadcasting rules.
///
/// Shapes are aligned on their trailing axis; each pair of extents must be
/// equal or contain a 1, and the larger extent wins.
pub fn broadcast_shape(a: &[usize], b: &[usize]) -> Result<Vec<usize>, ShapeError> {
    let ndim = a.len().max(b.len());
    let mut shape = vec![1; ndim];
    for (i, extent) in shape.iter_mut().enumerate() {
        // distance from the trailing axis
        let k = ndim - 1 - i;
        let da = if k < a.len() { a[a.len() - 1 - k] } else { 1 };
        let db = if k < b.len() { b[b.len() - 1 - k] } else { 1 };
        *extent = match (da, db) {
            (da, db) if da == db => da,
            (1, db) => db,
            (da, 1) => da,
            _ => return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape)),
        };
    }
    Ok(shape)
}

/// Views of `a` and `b` broadcast to their common shape.
pub fn broadcast_pair<'a, 'b, A, B, S1, S2, D1, D2>(
    a: &'a ArrayBase<S1, D1>,
    b: &'b ArrayBase<S2, D2>,
) -> Result<(ArrayViewD<'a, A>, ArrayViewD<'b, B>), ShapeError>
where
    S1: Data<Elem = A>,
    S2: Data<Elem = B>,
    D1: Dimension,
    D2: Dimension,
{
    let shape = broadcast_shape(a.shape(), b.shape())?;
    let incompatible = || ShapeError::from_kind(ErrorKind::IncompatibleShape);
    let a = a.broadcast(shape.as_slice()).ok_or_else(incompatible)?;
    let b = b.broadcast(shape.as_slice()).ok_or_else(incompatible)?;
    Ok((a, b))
}
