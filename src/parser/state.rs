/// Decomposition state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Looking for a scheme before the first colon
    SchemeStart,
    /// Reading a `host:port` pair that has no scheme
    Port,
    /// Reading `[user[:pass]@]host[:port]`
    Authority,
    /// Reading `path[?query][#fragment]`
    Path,
}
