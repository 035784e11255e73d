//! Plugin version strings.
//!
//! Versions show up in plugin file names (`Better Bodies 2.2.esp`) and in
//! plugin descriptions (`Version: 1.3b`). A [`Version`] is a list of numeric
//! components with an optional trailing letter, compared component-wise with
//! missing components counting as zero, so `1.2` equals `1.2.0` and `1.2` sorts
//! before `1.2a`.

use std::cmp::Ordering ;
use once_cell::sync::Lazy ;
use regex::{ Captures, Regex };
use thiserror::Error ;



/// Regex fragment matching a version-like token. Also used for the `<VER>`
/// placeholder in rule plugin names.
pub const VERSION_PATTERN: &str = r"\d+(?:[._-]?\d+)*[a-z]?";

static EXACT: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(
    r"(?i)^\s*v?(\d+(?:[._-]\d+)*)([a-z])?\s*$"
).ok());

static IN_FILE_NAME: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(
    r"(?i)(\d+(?:[._-]\d+)*[a-z]?)\D*\.(?:esm|esp|omwaddon|omwscripts|omwgame)$"
).ok());

static IN_DESCRIPTION: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(
    r"(?i)(?:\bversion\s*:?\s*v?|\bv)(\d+(?:\.\d+)*[a-z]?)\b|\b(\d+(?:\.\d+)+[a-z]?)\b"
).ok());

/// Matches `text` against a static pattern. A pattern that failed to build matches nothing.
fn captures<'t>( regex: &Option<Regex>, text: &'t str ) -> Option<Captures<'t>> {
    regex.as_ref()?.captures( text )
}

/// A string could not be read as a version.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
#[error( "Invalid version: '{0}'" )]
pub struct InvalidVersion( pub String );

/// A parsed plugin version.
///
/// ```
/// use plugin_order::Version ;
///
/// let old: Version = "1.2".parse().unwrap();
/// let new: Version = "1.2a".parse().unwrap();
/// assert!( old < new );
/// assert_eq!( old, "1.2.0".parse::<Version>().unwrap() );
/// ```
#[derive( Clone, Debug )]
pub struct Version {
    numbers: Vec<u64>,
    suffix: Option<char>,
}

impl Version {

    /// Parses a bare version such as `1.2`, `v3`, `2_0_1b`.
    ///
    /// # Errors
    /// Returns [`InvalidVersion`] if `text` is not a bare version.
    pub fn parse( text: &str ) -> Result<Self, InvalidVersion> {
        let captures = captures( &EXACT, text ).ok_or_else(|| InvalidVersion( text.to_string() ))?;
        let numbers = captures[1]
            .split([ '.', '_', '-' ])
            .map(| part | part.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(| _ | InvalidVersion( text.to_string() ))?;
        let suffix = captures.get( 2 ).and_then(| m | m.as_str().chars().next() ).map(| c | c.to_ascii_lowercase() );
        Ok( Self { numbers, suffix })
    }

    /// Extracts the version embedded in a plugin file name, if any.
    ///
    /// ```
    /// use plugin_order::Version ;
    ///
    /// let version = Version::from_file_name( "Better Bodies 2.2.esp" ).unwrap();
    /// assert_eq!( version.to_string(), "2.2" );
    /// assert!( Version::from_file_name( "Morrowind.esm" ).is_none() );
    /// ```
    pub fn from_file_name( name: &str ) -> Option<Self> {
        captures( &IN_FILE_NAME, name )
            .and_then(| captures | Self::parse( &captures[1] ).ok() )
    }

    /// Extracts the first version mentioned in a plugin description, if any.
    pub fn from_description( description: &str ) -> Option<Self> {
        captures( &IN_DESCRIPTION, description )
            .and_then(| captures | captures.get( 1 ).or_else(|| captures.get( 2 )))
            .and_then(| m | Self::parse( m.as_str() ).ok() )
    }

    fn component( &self, index: usize ) -> u64 {
        self.numbers.get( index ).copied().unwrap_or( 0 )
    }

}

impl std::str::FromStr for Version {
    type Err = InvalidVersion ;
    fn from_str( text: &str ) -> Result<Self, Self::Err> { Self::parse( text )}
}

impl Ord for Version {
    fn cmp( &self, other: &Self ) -> Ordering {
        let len = self.numbers.len().max( other.numbers.len() );
        ( 0..len )
            .map(| index | self.component( index ).cmp( &other.component( index )))
            .find(| ordering | ordering.is_ne() )
            .unwrap_or( Ordering::Equal )
            .then_with(|| self.suffix.cmp( &other.suffix ))
    }
}

impl PartialOrd for Version {
    fn partial_cmp( &self, other: &Self ) -> Option<Ordering> { Some( self.cmp( other ))}
}

impl PartialEq for Version {
    fn eq( &self, other: &Self ) -> bool { self.cmp( other ).is_eq() }
}

impl Eq for Version {}

impl std::fmt::Display for Version {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        let mut numbers = self.numbers.iter();
        if let Some( first ) = numbers.next() { write!( f, "{}", first )?; }
        numbers.try_for_each(| number | write!( f, ".{}", number ))?;
        match self.suffix {
            Some( suffix ) => write!( f, "{}", suffix ),
            None => Ok(()),
        }
    }
}
