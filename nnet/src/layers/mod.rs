mod dense;
mod layer;
mod relu;
#[cfg(test)]
mod test;

pub(crate) use dense::Dense;
pub(crate) use layer::Layer;
pub(crate) use relu::Relu;
