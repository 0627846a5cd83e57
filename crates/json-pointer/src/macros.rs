/// Builds a [`PatchPath`](crate::PatchPath) from a list of unescaped segments.
#[macro_export]
macro_rules! patch_path {
    ($($segment:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut path = $crate::PatchPath::root();
        $(path.push($segment);)*
        path
    }};
}
