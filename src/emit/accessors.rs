//! The accessor library appended to every generated artifact.
//!
//! The functions operate on `ICON_UNICODE_MAP` only and mirror the native accessors of [`IconNameMap`](crate::map::IconNameMap).

/// The name of the generated map literal.
pub const MAP_NAME: &str = "ICON_UNICODE_MAP";

/// The exported accessor functions, in order of appearance.
pub const ACCESSOR_NAMES: [&str; 7] = [
    "getIconUnicode",
    "hasIcon",
    "getAllIconNames",
    "getIconNamesByType",
    "searchIcons",
    "getIconBaseName",
    "getIconVariants",
];

/// The source text of the accessor library.
pub const LIBRARY: &str = r#"// Accessors

/**
 * Returns the unicode character of an icon.
 * @param iconName icon name
 * @returns the unicode character, or null if the icon is unknown
 */
export function getIconUnicode(iconName: string): string | null {
  return ICON_UNICODE_MAP[iconName] as string ?? null
}

/**
 * Checks whether an icon exists.
 * @param iconName icon name
 * @returns whether the icon exists
 */
export function hasIcon(iconName: string): boolean {
  return iconName in ICON_UNICODE_MAP
}

/**
 * Returns all icon names.
 * @returns icon names in map order
 */
export function getAllIconNames(): string[] {
  return UTSJSONObject.keys(ICON_UNICODE_MAP)
}

/**
 * Returns the icon names of a category.
 * @param type icon category ('fill' | 'line' | 'other')
 * @returns sorted icon names
 */
export function getIconNamesByType(type: 'fill' | 'line' | 'other'): string[] {
  const allNames = UTSJSONObject.keys(ICON_UNICODE_MAP)

  switch (type) {
    case 'fill':
      return allNames.filter(name => name.endsWith('-fill')).sort()
    case 'line':
      return allNames.filter(name => name.endsWith('-line')).sort()
    case 'other':
      return allNames.filter(name => !name.endsWith('-fill') && !name.endsWith('-line')).sort()
    default:
      return []
  }
}

/**
 * Searches icons by a case-insensitive keyword.
 * @param keyword keyword
 * An empty keyword matches no icon, unlike a plain substring test which matches every name.
 * @returns sorted matching icon names
 */
export function searchIcons(keyword: string): string[] {
  if (keyword == '') return []

  const lowerKeyword = keyword.toLowerCase()
  return UTSJSONObject.keys(ICON_UNICODE_MAP)
    .filter(name => name.toLowerCase().includes(lowerKeyword))
    .sort()
}

/**
 * Returns the base name of an icon (without a -fill or -line suffix).
 * @param iconName icon name
 * @returns base name
 */
export function getIconBaseName(iconName: string): string {
  return iconName.replace(/-(fill|line)$/, '')
}

/**
 * Returns the variants of a base name that exist.
 * @param baseName base name
 * @returns variants in order fill, line, base
 */
export function getIconVariants(baseName: string): string[] {
  const variants: string[] = []
  const fillName = `${baseName}-fill`
  const lineName = `${baseName}-line`

  if (hasIcon(fillName)) variants.push(fillName)
  if (hasIcon(lineName)) variants.push(lineName)
  if (hasIcon(baseName)) variants.push(baseName)

  return variants
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports_every_accessor_once() {
        for name in ACCESSOR_NAMES.iter() {
            let declaration = format!("export function {}(", name);
            assert_eq!(LIBRARY.matches(&declaration).count(), 1, "{}", name);
        }
        assert_eq!(LIBRARY.matches("export function").count(), ACCESSOR_NAMES.len());
    }

    #[test]
    fn test_library_reads_only_the_map() {
        assert!(LIBRARY.contains(MAP_NAME));
        assert!(!LIBRARY.contains("export const"));
    }
}
