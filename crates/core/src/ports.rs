use crate::facade::FacadeFactory;

/// Host surface exposing a media-query entry point.
///
/// The mock installs and removes its facade through this seam. The entry
/// point is an overridable property of the host: installing again replaces
/// the previous facade, and removal leaves the host without one until the
/// next install.
pub trait HostGlobal {
    /// Install `factory` as the host's media-query entry point, replacing
    /// any previous one.
    fn install_match_media(&self, factory: FacadeFactory);

    /// Remove the entry point; the host behaves as if it never had one.
    fn remove_match_media(&self);
}
