use rand::RngCore;

use contactgen_core::Variant;

use crate::dataset::Row;
use crate::errors::GenerationError;
use crate::generators::{FieldKind, GeneratorContext};

use FieldKind::*;

/// One column of a variant layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn col(name: &'static str, kind: FieldKind) -> ColumnSpec {
    ColumnSpec { name, kind }
}

/// Static layout of a variant: ordered columns and the kind of each value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDefinition {
    pub variant: Variant,
    pub columns: &'static [ColumnSpec],
}

impl SchemaDefinition {
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of the deterministically aliased email column.
    pub fn alias_column(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.kind == FieldKind::AliasEmail)
    }

    /// Synthesize one row, positionally aligned with [`SchemaDefinition::header`].
    pub fn synthesize_row(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> contactgen_core::Result<Row> {
        self.columns
            .iter()
            .map(|column| column.kind.generate(ctx, rng))
            .collect()
    }
}

static SIMPLE_COLUMNS: [ColumnSpec; 7] = [
    col("First name", FirstName),
    col("Last name", LastName),
    col("Phone number", PhoneNumber),
    col("Email address", AliasEmail),
    col("Company", CompanyName),
    col("Title/Role", JobTitle),
    col("Website URL", Url),
];

static EXTENDED_COLUMNS: [ColumnSpec; 61] = [
    col("First Name", FirstName),
    col("Middle Name", MiddleName),
    col("Last Name", LastName),
    col("Title", JobTitle),
    col("Suffix", Suffix),
    col("Nickname", ZodiacSign),
    col("Given Yomi", Word),
    col("Surname Yomi", Word),
    col("E-mail Address", AliasEmail),
    col("E-mail 2 Address", FreeEmail),
    col("E-mail 3 Address", FreeEmail),
    col("Home Phone", PhoneNumber),
    col("Home Phone 2", PhoneNumber),
    col("Business Phone", PhoneNumber),
    col("Business Phone 2", PhoneNumber),
    col("Mobile Phone", PhoneNumber),
    col("Car Phone", PhoneNumber),
    col("Other Phone", PhoneNumber),
    col("Primary Phone", PhoneNumber),
    col("Pager", PhoneNumber),
    col("Business Fax", PhoneNumber),
    col("Home Fax", PhoneNumber),
    col("Other Fax", PhoneNumber),
    col("Company Main Phone", PhoneNumber),
    col("Callback", PhoneNumber),
    col("Radio Phone", PhoneNumber),
    col("Telex", PhoneNumber),
    col("TTY/TDD Phone", PhoneNumber),
    col("IMAddress", FreeEmail),
    col("Job Title", JobTitle),
    col("Department", JobArea),
    col("Company", CompanyName),
    col("Office Location", StreetAddress),
    col("Manager's Name", FullName),
    col("Assistant's Name", FullName),
    col("Assistant's Phone", PhoneNumber),
    col("Company Yomi", Word),
    col("Business Street", StreetAddress),
    col("Business City", City),
    col("Business State", StateAbbr),
    col("Business Postal Code", ZipCode),
    col("Business Country/Region", Country),
    col("Home Street", StreetAddress),
    col("Home City", City),
    col("Home State", StateAbbr),
    col("Home Postal Code", ZipCode),
    col("Home Country/Region", Country),
    col("Other Street", StreetAddress),
    col("Other City", City),
    col("Other State", StateAbbr),
    col("Other Postal Code", ZipCode),
    col("Other Country/Region", Country),
    col("Personal Web Page", Url),
    col("Spouse", FullName),
    col("Schools", Word),
    col("Hobby", Word),
    col("Location", City),
    col("Web Page", Url),
    col("Birthday", PastDate),
    col("Anniversary", PastDate),
    col("Notes", Word),
];

static REGISTRY: [SchemaDefinition; 2] = [
    SchemaDefinition {
        variant: Variant::Simple,
        columns: &SIMPLE_COLUMNS,
    },
    SchemaDefinition {
        variant: Variant::Extended,
        columns: &EXTENDED_COLUMNS,
    },
];

/// Every registered layout, in [`Variant::ALL`] order.
pub fn registry() -> &'static [SchemaDefinition] {
    &REGISTRY
}

pub fn schema_for(variant: Variant) -> &'static SchemaDefinition {
    match variant {
        Variant::Simple => &REGISTRY[0],
        Variant::Extended => &REGISTRY[1],
    }
}

/// Look up a layout by its identifier.
pub fn resolve(variant_id: &str) -> Result<&'static SchemaDefinition, GenerationError> {
    Variant::parse(variant_id)
        .map(schema_for)
        .map_err(|_| GenerationError::UnknownVariant(variant_id.to_string()))
}
