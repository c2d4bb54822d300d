use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Sortable hero columns. Keeping this a closed set means the db layer can
/// interpolate column names into ORDER BY without quoting concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            other => Err(AppError::InvalidSortProperty(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One `field,direction` entry of a sort spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses the `field,direction` form used in query strings, e.g.
    /// `name,desc`. The direction is optional and defaults to ascending.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        let mut parts = s.splitn(2, ',');
        let field = parts.next().unwrap_or_default().parse::<SortField>()?;
        let direction = match parts.next() {
            None | Some("asc") | Some("ASC") => SortDirection::Asc,
            Some("desc") | Some("DESC") => SortDirection::Desc,
            Some(_) => return Err(AppError::InvalidSortProperty(s.to_string())),
        };
        Ok(Self { field, direction })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{},{}", self.field.column(), direction)
    }
}

/// A request for one bounded slice of the record set. `page` is zero-based.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32, sort: Vec<SortOrder>) -> Self {
        Self { page, size, sort }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// One slice of the full record set plus the total count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u32 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size)) as u32
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_with_direction() {
        let order = SortOrder::parse("name,desc").unwrap();
        assert_eq!(order.field, SortField::Name);
        assert_eq!(order.direction, SortDirection::Desc);
    }

    #[test]
    fn direction_defaults_to_ascending() {
        let order = SortOrder::parse("id").unwrap();
        assert_eq!(order.field, SortField::Id);
        assert_eq!(order.direction, SortDirection::Asc);
    }

    #[test]
    fn rejects_unknown_field() {
        assert!(matches!(
            SortOrder::parse("health,asc"),
            Err(AppError::InvalidSortProperty(_))
        ));
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!(matches!(
            SortOrder::parse("name,sideways"),
            Err(AppError::InvalidSortProperty(_))
        ));
    }

    #[test]
    fn display_round_trips() {
        let order = SortOrder::parse("name,desc").unwrap();
        assert_eq!(order.to_string(), "name,desc");
    }

    #[test]
    fn page_math() {
        let page = Page::<u8> {
            content: vec![],
            number: 1,
            size: 20,
            total_elements: 41,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());

        let last = Page::<u8> {
            content: vec![],
            number: 2,
            size: 20,
            total_elements: 41,
        };
        assert!(!last.has_next());
    }

    #[test]
    fn offset_scales_with_page() {
        let request = PageRequest::new(3, 25, vec![]);
        assert_eq!(request.offset(), 75);
        assert_eq!(request.limit(), 25);
    }
}
