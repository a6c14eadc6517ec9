//! 以字符串形式存储与传输的枚举

/// 定义以小写字符串序列化的枚举
///
/// 自动生成：
/// - serde 序列化/反序列化（使用给定的字符串）
/// - `as_str()` / `Display` / `FromStr`
/// - `ALL` 常量，列出全部取值
macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, ts_rs::TS,
        )]
        $(#[$meta])*
        pub enum $name {
            $(#[serde(rename = $value)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!("Invalid {}: {s}", stringify!($name))),
                }
            }
        }
    };
}

pub(crate) use define_string_enum;

#[cfg(test)]
mod tests {
    define_string_enum! {
        pub enum Shade {
            Light => "light",
            Dark => "dark",
        }
    }

    #[test]
    fn test_string_enum_round_trip() {
        assert_eq!("dark".parse::<Shade>(), Ok(Shade::Dark));
        assert_eq!(Shade::Light.to_string(), "light");
        assert_eq!(Shade::ALL.len(), 2);
        assert!("grey".parse::<Shade>().is_err());
        assert_eq!(serde_json::to_string(&Shade::Dark).unwrap(), "\"dark\"");
    }
}
