//! Page requests and page responses
//!
//! Query strings follow the `page`, `size` and `sort=field[,asc|desc]` convention
//! and pages serialize with the usual `content`/`totalElements` envelope.

use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 12;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

impl Sort {
    /// Parse `field[,asc|desc]`
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split(',').map(str::trim);
        let property = parts.next().unwrap_or_default();
        if property.is_empty() {
            return Err(ShopError::field("sort", "Sort property cannot be empty"));
        }

        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => Direction::Asc,
            Some("desc") => Direction::Desc,
            Some(other) => {
                return Err(ShopError::field(
                    "sort",
                    format!("Invalid sort direction: {}", other),
                ));
            }
        };

        if parts.next().is_some() {
            return Err(ShopError::field("sort", "Expected field[,asc|desc]"));
        }

        Ok(Self {
            property: property.to_string(),
            direction,
        })
    }
}

/// Validated page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Option<Sort>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, property: &str, direction: Direction) -> Self {
        self.sort = Some(Sort {
            property: property.to_string(),
            direction,
        });
        self
    }

    /// Reject sizes of zero and pages whose row offset does not fit a signed 64-bit integer
    pub fn check_bounds(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ShopError::field("size", "Page size must be at least 1"));
        }
        match self.page.checked_mul(self.size) {
            Some(offset) if offset <= i64::MAX as u64 => Ok(()),
            _ => Err(ShopError::field("page", "Page number is out of range")),
        }
    }

    /// Resolve the sort property against the columns a query allows
    pub fn sort_property<'a>(&'a self, allowed: &[&str]) -> Result<Option<(&'a str, Direction)>> {
        match &self.sort {
            None => Ok(None),
            Some(sort) if allowed.contains(&sort.property.as_str()) => {
                Ok(Some((sort.property.as_str(), sort.direction)))
            }
            Some(sort) => Err(ShopError::field(
                "sort",
                format!("Unsupported sort property: {}", sort.property),
            )),
        }
    }
}

impl TryFrom<PageParams> for PageRequest {
    type Error = ShopError;

    fn try_from(params: PageParams) -> Result<Self> {
        let sort = match params.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(Sort::parse(raw)?),
        };

        let request = Self {
            page: params.page.unwrap_or(0),
            size: params.size.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
            sort,
        };
        request.check_bounds()?;
        Ok(request)
    }
}

/// One page of results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
    pub size: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(request.size.max(1));
        let number_of_elements = content.len() as u64;
        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
            number_of_elements,
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
        }
    }

    /// Convert the content while keeping the page envelope
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }

    /// Swap in different content, recounting the elements on the page
    pub fn with_content<U>(self, content: Vec<U>) -> Page<U> {
        Page {
            number_of_elements: content.len() as u64,
            empty: content.is_empty(),
            content,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            first: self.first,
            last: self.last,
        }
    }
}
