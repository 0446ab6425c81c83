// src/domain/category.rs

use std::fmt;
use std::str::FromStr;

const SITE: &str = "https://www.expat-dakar.com";

/// The three listing categories the app knows how to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    RentalApartment,
    FurnishedApartments,
    LandForSale,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::RentalApartment,
        Category::FurnishedApartments,
        Category::LandForSale,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::RentalApartment => "Rental Apartment",
            Category::FurnishedApartments => "Furnished Apartments",
            Category::LandForSale => "Land For Sale",
        }
    }

    /// Identifier used in query strings.
    pub fn slug(self) -> &'static str {
        match self {
            Category::RentalApartment => "rental-apartment",
            Category::FurnishedApartments => "furnished-apartments",
            Category::LandForSale => "land-for-sale",
        }
    }

    fn site_path(self) -> &'static str {
        match self {
            Category::RentalApartment => "appartements-a-louer",
            Category::FurnishedApartments => "appartements-meubles",
            Category::LandForSale => "terrains-a-vendre",
        }
    }

    /// Index page URL with a `{page}` placeholder.
    pub fn url_template(self) -> String {
        format!("{SITE}/{}?page={{page}}", self.site_path())
    }

    pub fn last_page(self) -> u32 {
        match self {
            Category::RentalApartment => 124,
            Category::FurnishedApartments => 79,
            Category::LandForSale => 50,
        }
    }

    pub fn contains_page(self, page: u32) -> bool {
        (1..=self.last_page()).contains(&page)
    }

    /// Saved scrape offered by the download action.
    pub fn raw_snapshot_file(self) -> &'static str {
        match self {
            Category::RentalApartment => "Apartment_1.csv",
            Category::FurnishedApartments => "Apartment_2.csv",
            Category::LandForSale => "Apartment_3.csv",
        }
    }

    /// Cleaned data used by the dashboard.
    pub fn clean_snapshot_file(self) -> &'static str {
        match self {
            Category::RentalApartment => "Url1.csv",
            Category::FurnishedApartments => "Url2.csv",
            Category::LandForSale => "Url3.csv",
        }
    }

    /// "Rental Apartment" -> "Rental_Apartment.csv"
    pub fn csv_file_name(self) -> String {
        format!("{}.csv", self.label().replace(' ', "_"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}
