//! Tool registry.
//!
//! Every tool widget on the site has exactly one `ToolId` variant. Slugs are
//! resolved through the enum, so a tool that is not listed here cannot be
//! linked from a sitemap.

use std::fmt;
use std::str::FromStr;

use super::categories::CategoryId;
use crate::domains::catalog::error::CatalogError;

/// Static metadata about one tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub name: &'static str,
    pub category: CategoryId,
    /// Usage signal on a 0-100 scale; `None` for unranked tools.
    pub popularity: Option<f64>,
    pub is_new: bool,
    /// Last content update as `YYYY-MM-DD`.
    pub updated: Option<&'static str>,
}

impl ToolDescriptor {
    pub fn slug(&self) -> &'static str {
        self.id.slug()
    }
}

/// Identifier of a tool widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    // Converters
    LengthConverter,
    WeightConverter,
    TemperatureConverter,
    AreaConverter,
    SpeedConverter,
    DataStorageConverter,
    TimestampConverter,
    RomanNumeralConverter,
    NumberToWords,
    // Calculators
    AgeCalculator,
    BmiCalculator,
    EmiCalculator,
    GstCalculator,
    SipCalculator,
    PercentageCalculator,
    DiscountCalculator,
    DateDifferenceCalculator,
    // Text tools
    WordCounter,
    CaseConverter,
    TextDiff,
    RemoveDuplicateLines,
    TextReverser,
    // Developer tools
    JsonFormatter,
    Base64,
    UrlEncoder,
    HtmlEncoder,
    JwtDecoder,
    HashGenerator,
    RegexTester,
    MarkdownPreview,
    // Generators
    PasswordGenerator,
    UuidGenerator,
    LoremIpsumGenerator,
    QrCodeGenerator,
    SlugGenerator,
    // Lookups
    IfscCodeLookup,
    PinCodeLookup,
    StdCodeLookup,
}

impl ToolId {
    /// Every tool in directory order.
    pub const ALL: [ToolId; 38] = [
        Self::LengthConverter,
        Self::WeightConverter,
        Self::TemperatureConverter,
        Self::AreaConverter,
        Self::SpeedConverter,
        Self::DataStorageConverter,
        Self::TimestampConverter,
        Self::RomanNumeralConverter,
        Self::NumberToWords,
        Self::AgeCalculator,
        Self::BmiCalculator,
        Self::EmiCalculator,
        Self::GstCalculator,
        Self::SipCalculator,
        Self::PercentageCalculator,
        Self::DiscountCalculator,
        Self::DateDifferenceCalculator,
        Self::WordCounter,
        Self::CaseConverter,
        Self::TextDiff,
        Self::RemoveDuplicateLines,
        Self::TextReverser,
        Self::JsonFormatter,
        Self::Base64,
        Self::UrlEncoder,
        Self::HtmlEncoder,
        Self::JwtDecoder,
        Self::HashGenerator,
        Self::RegexTester,
        Self::MarkdownPreview,
        Self::PasswordGenerator,
        Self::UuidGenerator,
        Self::LoremIpsumGenerator,
        Self::QrCodeGenerator,
        Self::SlugGenerator,
        Self::IfscCodeLookup,
        Self::PinCodeLookup,
        Self::StdCodeLookup,
    ];

    /// URL path segment under `/tool/`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::LengthConverter => "length-converter",
            Self::WeightConverter => "weight-converter",
            Self::TemperatureConverter => "temperature-converter",
            Self::AreaConverter => "area-converter",
            Self::SpeedConverter => "speed-converter",
            Self::DataStorageConverter => "data-storage-converter",
            Self::TimestampConverter => "timestamp-converter",
            Self::RomanNumeralConverter => "roman-numeral-converter",
            Self::NumberToWords => "number-to-words",
            Self::AgeCalculator => "age-calculator",
            Self::BmiCalculator => "bmi-calculator",
            Self::EmiCalculator => "emi-calculator",
            Self::GstCalculator => "gst-calculator",
            Self::SipCalculator => "sip-calculator",
            Self::PercentageCalculator => "percentage-calculator",
            Self::DiscountCalculator => "discount-calculator",
            Self::DateDifferenceCalculator => "date-difference-calculator",
            Self::WordCounter => "word-counter",
            Self::CaseConverter => "case-converter",
            Self::TextDiff => "text-diff",
            Self::RemoveDuplicateLines => "remove-duplicate-lines",
            Self::TextReverser => "text-reverser",
            Self::JsonFormatter => "json-formatter",
            Self::Base64 => "base64",
            Self::UrlEncoder => "url-encoder",
            Self::HtmlEncoder => "html-encoder",
            Self::JwtDecoder => "jwt-decoder",
            Self::HashGenerator => "hash-generator",
            Self::RegexTester => "regex-tester",
            Self::MarkdownPreview => "markdown-preview",
            Self::PasswordGenerator => "password-generator",
            Self::UuidGenerator => "uuid-generator",
            Self::LoremIpsumGenerator => "lorem-ipsum-generator",
            Self::QrCodeGenerator => "qr-code-generator",
            Self::SlugGenerator => "slug-generator",
            Self::IfscCodeLookup => "ifsc-code-lookup",
            Self::PinCodeLookup => "pin-code-lookup",
            Self::StdCodeLookup => "std-code-lookup",
        }
    }

    /// Full metadata for this tool.
    pub fn descriptor(self) -> ToolDescriptor {
        use CategoryId::*;

        let (name, category, popularity, is_new, updated) = match self {
            Self::LengthConverter => ("Length Converter", Converters, Some(72.0), false, None),
            Self::WeightConverter => ("Weight Converter", Converters, Some(64.0), false, None),
            Self::TemperatureConverter => {
                ("Temperature Converter", Converters, Some(58.0), false, None)
            }
            Self::AreaConverter => ("Area Converter", Converters, Some(61.0), false, None),
            Self::SpeedConverter => ("Speed Converter", Converters, None, false, None),
            Self::DataStorageConverter => ("Data Storage Converter", Converters, None, true, None),
            Self::TimestampConverter => (
                "Unix Timestamp Converter",
                Converters,
                Some(47.0),
                false,
                Some("2026-03-14"),
            ),
            Self::RomanNumeralConverter => ("Roman Numeral Converter", Converters, None, false, None),
            Self::NumberToWords => (
                "Number to Words (Indian System)",
                Converters,
                Some(66.0),
                false,
                None,
            ),
            Self::AgeCalculator => ("Age Calculator", Calculators, Some(88.0), false, None),
            Self::BmiCalculator => ("BMI Calculator", Calculators, Some(70.0), false, None),
            Self::EmiCalculator => (
                "EMI Calculator",
                Calculators,
                Some(95.0),
                false,
                Some("2026-08-01"),
            ),
            Self::GstCalculator => (
                "GST Calculator",
                Calculators,
                Some(92.0),
                false,
                Some("2026-09-22"),
            ),
            Self::SipCalculator => ("SIP Calculator", Calculators, Some(84.0), false, None),
            Self::PercentageCalculator => {
                ("Percentage Calculator", Calculators, Some(80.0), false, None)
            }
            Self::DiscountCalculator => ("Discount Calculator", Calculators, Some(52.0), false, None),
            Self::DateDifferenceCalculator => {
                ("Date Difference Calculator", Calculators, None, true, None)
            }
            Self::WordCounter => ("Word Counter", TextTools, Some(86.0), false, None),
            Self::CaseConverter => ("Case Converter", TextTools, Some(63.0), false, None),
            Self::TextDiff => ("Text Diff Checker", TextTools, Some(41.0), false, None),
            Self::RemoveDuplicateLines => ("Remove Duplicate Lines", TextTools, None, false, None),
            Self::TextReverser => ("Text Reverser", TextTools, None, false, None),
            Self::JsonFormatter => (
                "JSON Formatter & Validator",
                DeveloperTools,
                Some(90.0),
                false,
                Some("2026-05-10"),
            ),
            Self::Base64 => ("Base64 Encoder / Decoder", DeveloperTools, Some(90.0), false, None),
            Self::UrlEncoder => ("URL Encoder / Decoder", DeveloperTools, Some(68.0), false, None),
            Self::HtmlEncoder => ("HTML Entity Encoder", DeveloperTools, Some(35.0), false, None),
            Self::JwtDecoder => ("JWT Decoder", DeveloperTools, Some(55.0), true, None),
            Self::HashGenerator => ("Hash Generator", DeveloperTools, Some(49.0), false, None),
            Self::RegexTester => ("Regex Tester", DeveloperTools, None, true, None),
            Self::MarkdownPreview => ("Markdown Preview", DeveloperTools, Some(38.0), false, None),
            Self::PasswordGenerator => {
                ("Password Generator", Generators, Some(82.0), false, None)
            }
            Self::UuidGenerator => ("UUID Generator", Generators, Some(60.0), false, None),
            Self::LoremIpsumGenerator => {
                ("Lorem Ipsum Generator", Generators, Some(44.0), false, None)
            }
            Self::QrCodeGenerator => ("QR Code Generator", Generators, Some(87.0), false, None),
            Self::SlugGenerator => ("Slug Generator", Generators, None, true, None),
            Self::IfscCodeLookup => (
                "IFSC Code Lookup",
                Lookups,
                Some(78.0),
                false,
                Some("2026-07-01"),
            ),
            Self::PinCodeLookup => ("PIN Code Lookup", Lookups, Some(75.0), false, None),
            Self::StdCodeLookup => ("STD Code Lookup", Lookups, Some(40.0), false, None),
        };

        ToolDescriptor {
            id: self,
            name,
            category,
            popularity,
            is_new,
            updated,
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ToolId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.slug() == s)
            .ok_or_else(|| CatalogError::unknown_tool(s))
    }
}
