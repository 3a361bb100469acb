/// Client-side route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public landing and registration page at `/`
    Registration,
    /// Authenticated user dashboard at `/profile`
    Profile,
    /// Authenticated advantage listing at `/advantages`
    Advantages,
}

impl Route {
    /// The path this route is mounted at
    pub fn path(&self) -> &'static str {
        match self {
            Self::Registration => "/",
            Self::Profile => "/profile",
            Self::Advantages => "/advantages",
        }
    }

    /// Resolve a path back to its route, if it is part of the table
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Registration),
            "/profile" => Some(Self::Profile),
            "/advantages" => Some(Self::Advantages),
            _ => None,
        }
    }

    /// Whether the route is reachable without an authenticated session
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Registration)
    }
}
