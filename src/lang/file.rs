//! A rendered output file holding one or more packages.

use super::package::Package;

#[derive(Debug, Clone, Default)]
pub struct File {
    pub header: String,
    pub footer: String,
    pub packages: Vec<Package>,
}

impl File {
    pub fn new(header: impl Into<String>, footer: impl Into<String>, packages: Vec<Package>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
            packages,
        }
    }
}
