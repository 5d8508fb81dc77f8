// ═══════════════════════════════════════════════════════════════════
// Symbol Normalizer Tests — classification, suffix padding, idempotence
// ═══════════════════════════════════════════════════════════════════

use vaultchain_core::models::asset::AssetClass;
use vaultchain_core::symbols::{is_a_share_suffix, normalize};

// ── Crypto classification ───────────────────────────────────────────

mod crypto {
    use super::*;

    #[test]
    fn known_ticker_maps_to_coin_id() {
        let asset = normalize("BTC");
        assert_eq!(asset.asset_class, AssetClass::Crypto);
        assert_eq!(asset.provider_id, "bitcoin");
        assert_eq!(asset.original_symbol, "BTC");
        assert_eq!(asset.exchange_suffix, None);
    }

    #[test]
    fn known_ticker_is_case_insensitive() {
        assert_eq!(normalize("btc").provider_id, "bitcoin");
        assert_eq!(normalize("Eth").provider_id, "ethereum");
    }

    #[test]
    fn direct_coin_id_passes_through() {
        let asset = normalize("bitcoin");
        assert_eq!(asset.asset_class, AssetClass::Crypto);
        assert_eq!(asset.provider_id, "bitcoin");
    }

    #[test]
    fn unknown_lowercase_symbol_defaults_to_coin_id() {
        // Lets users pass CoinGecko ids we have no ticker mapping for
        let asset = normalize("solana");
        assert_eq!(asset.asset_class, AssetClass::Crypto);
        assert_eq!(asset.provider_id, "solana");
    }

    #[test]
    fn mixed_case_unknown_defaults_to_crypto_lowercased() {
        let asset = normalize("Fartcoin");
        assert_eq!(asset.asset_class, AssetClass::Crypto);
        assert_eq!(asset.provider_id, "fartcoin");
    }

    #[test]
    fn full_table_resolves() {
        for (sym, id) in [
            ("BTC", "bitcoin"),
            ("ETH", "ethereum"),
            ("SOL", "solana"),
            ("DOGE", "dogecoin"),
            ("BNB", "binancecoin"),
            ("XRP", "ripple"),
            ("ADA", "cardano"),
            ("MATIC", "polygon-pos"),
            ("TRX", "tron"),
            ("LTC", "litecoin"),
            ("DOT", "polkadot"),
        ] {
            let asset = normalize(sym);
            assert_eq!(asset.asset_class, AssetClass::Crypto, "{sym}");
            assert_eq!(asset.provider_id, id, "{sym}");
        }
    }
}

// ── Equity classification ───────────────────────────────────────────

mod equity {
    use super::*;

    #[test]
    fn uppercase_unmapped_ticker_is_equity() {
        let asset = normalize("AAPL");
        assert_eq!(asset.asset_class, AssetClass::Equity);
        assert_eq!(asset.provider_id, "AAPL");
        assert_eq!(asset.exchange_suffix, None);
    }

    #[test]
    fn ticker_with_digits_is_equity() {
        let asset = normalize("7203.T");
        assert_eq!(asset.asset_class, AssetClass::Equity);
        assert_eq!(asset.provider_id, "7203.T");
        assert_eq!(asset.exchange_suffix.as_deref(), Some("T"));
    }

    #[test]
    fn london_suffix_is_extracted() {
        let asset = normalize("RIO.L");
        assert_eq!(asset.provider_id, "RIO.L");
        assert_eq!(asset.exchange_suffix.as_deref(), Some("L"));
    }

    #[test]
    fn lowercase_suffixed_ticker_is_uppercased() {
        let asset = normalize("rio.l");
        assert_eq!(asset.asset_class, AssetClass::Equity);
        assert_eq!(asset.provider_id, "RIO.L");
    }

    #[test]
    fn original_symbol_is_preserved_verbatim() {
        let asset = normalize("700.hk");
        assert_eq!(asset.original_symbol, "700.hk");
        assert_eq!(asset.provider_id, "0700.HK");
    }
}

// ── Hong Kong padding ───────────────────────────────────────────────

mod hk_padding {
    use super::*;

    #[test]
    fn three_digit_base_pads_to_four() {
        assert_eq!(normalize("700.HK").provider_id, "0700.HK");
    }

    #[test]
    fn single_digit_base_pads_to_four() {
        assert_eq!(normalize("5.HK").provider_id, "0005.HK");
    }

    #[test]
    fn four_digit_base_is_unchanged() {
        assert_eq!(normalize("9988.HK").provider_id, "9988.HK");
    }

    #[test]
    fn five_digit_base_is_unchanged() {
        assert_eq!(normalize("80737.HK").provider_id, "80737.HK");
    }

    #[test]
    fn non_numeric_hk_base_is_not_padded() {
        assert_eq!(normalize("HSBC.HK").provider_id, "HSBC.HK");
    }

    #[test]
    fn non_hk_numeric_base_is_not_padded() {
        assert_eq!(normalize("005930.KS").provider_id, "005930.KS");
    }
}

// ── A-share detection ───────────────────────────────────────────────

mod a_shares {
    use super::*;

    #[test]
    fn shanghai_suffix_flags_unsupported_market() {
        let asset = normalize("600519.SS");
        assert_eq!(asset.asset_class, AssetClass::Equity);
        assert!(asset.is_unsupported_market());
    }

    #[test]
    fn shenzhen_suffix_flags_unsupported_market() {
        assert!(normalize("000001.SZ").is_unsupported_market());
    }

    #[test]
    fn other_suffixes_are_supported() {
        assert!(!normalize("700.HK").is_unsupported_market());
        assert!(!normalize("AAPL").is_unsupported_market());
    }

    #[test]
    fn suffix_predicate() {
        assert!(is_a_share_suffix("SS"));
        assert!(is_a_share_suffix("SZ"));
        assert!(!is_a_share_suffix("HK"));
        assert!(!is_a_share_suffix("L"));
    }
}

// ── Determinism & idempotence ───────────────────────────────────────

mod idempotence {
    use super::*;

    #[test]
    fn normalizing_twice_is_identical() {
        for sym in ["BTC", "bitcoin", "AAPL", "700.HK", "7203.T", "dogecoin"] {
            assert_eq!(normalize(sym), normalize(sym), "{sym}");
        }
    }

    #[test]
    fn normalizing_a_provider_id_is_stable() {
        // Feeding the output id back in yields the same classification and id
        for sym in ["BTC", "700.HK", "AAPL", "RIO.L", "bitcoin"] {
            let first = normalize(sym);
            let second = normalize(&first.provider_id);
            assert_eq!(second.asset_class, first.asset_class, "{sym}");
            assert_eq!(second.provider_id, first.provider_id, "{sym}");
        }
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(normalize("  BTC  ").provider_id, "bitcoin");
        assert_eq!(normalize(" 700.HK ").provider_id, "0700.HK");
    }
}
