index_vec::define_index_type! {
    pub(super) struct TokenIndex = usize;
}
