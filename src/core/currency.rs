//! Static lookup table of tradable currencies and their market codes.
//!
//! Each entry carries the symbol codes used against the two quote
//! currencies (IRT and USDT) plus the short wallet symbol.

use crate::core::errors::NobitexError;
use crate::core::types::QuoteCurrency;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    pub name: &'static str,
    pub irt_code: &'static str,
    pub usdt_code: &'static str,
    pub symbol: &'static str,
}

impl Currency {
    pub const fn new(
        name: &'static str,
        irt_code: &'static str,
        usdt_code: &'static str,
        symbol: &'static str,
    ) -> Self {
        Self {
            name,
            irt_code,
            usdt_code,
            symbol,
        }
    }

    /// Market code of this currency against the given quote, e.g.
    /// `Currency::BTC.resolve(QuoteCurrency::Irt)` → `"BTCIRT"`.
    ///
    /// Fails with [`NobitexError::InvalidCurrency`] when the table holds no
    /// code for the requested quote.
    pub fn resolve(&self, quote: QuoteCurrency) -> Result<&'static str, NobitexError> {
        let code = match quote {
            QuoteCurrency::Irt => self.irt_code,
            QuoteCurrency::Usdt => self.usdt_code,
        };
        if code.is_empty() {
            return Err(NobitexError::InvalidCurrency {
                name: self.name.to_string(),
                quote: quote.as_str().to_string(),
            });
        }
        Ok(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Currency {
    /// Wildcard accepted by some listing endpoints.
    pub const ALL: Self = Self::new("all", "all", "all", "all");
    pub const RIAL: Self = Self::new("rial", "RLS", "RLS", "rls");

    pub const INCH: Self = Self::new("1inch", "1INCHIRT", "1INCHUSDT", "1inch");
    pub const AAVE: Self = Self::new("aave", "AAVEIRT", "AAVEUSDT", "aave");
    pub const ADA: Self = Self::new("ada", "ADAIRT", "ADAUSDT", "ada");
    pub const AGLD: Self = Self::new("agld", "AGLDIRT", "AGLDUSDT", "agld");
    pub const ALGO: Self = Self::new("algo", "ALGOIRT", "ALGOUSDT", "algo");
    pub const ANT: Self = Self::new("ant", "ANTIRT", "ANTUSDT", "ant");
    pub const API3: Self = Self::new("api3", "API3IRT", "API3USDT", "api3");
    pub const APT: Self = Self::new("apt", "APTIRT", "APTUSDT", "apt");
    pub const AVAX: Self = Self::new("avax", "AVAXIRT", "AVAXUSDT", "avax");
    pub const AXS: Self = Self::new("axs", "AXSIRT", "AXSUSDT", "axs");
    pub const BAND: Self = Self::new("band", "BANDIRT", "BANDUSDT", "band");
    pub const BAT: Self = Self::new("bat", "BATIRT", "BATUSDT", "bat");
    pub const BCH: Self = Self::new("bch", "BCHIRT", "BCHUSDT", "bch");
    pub const BLUR: Self = Self::new("blur", "BLURIRT", "BLURUSDT", "blur");
    pub const BNB: Self = Self::new("bnb", "BNBIRT", "BNBUSDT", "bnb");
    pub const BTC: Self = Self::new("btc", "BTCIRT", "BTCUSDT", "btc");
    pub const CELR: Self = Self::new("celr", "CELRIRT", "CELRUSDT", "celr");
    pub const COMP: Self = Self::new("comp", "COMPIRT", "COMPUSDT", "comp");
    pub const CRV: Self = Self::new("crv", "CRVIRT", "CRVUSDT", "crv");
    pub const CVX: Self = Self::new("cvx", "CVXIRT", "CVXUSDT", "cvx");
    pub const DAI: Self = Self::new("dai", "DAIIRT", "DAIUSDT", "dai");
    pub const DAO: Self = Self::new("dao", "DAOIRT", "DAOUSDT", "dao");
    pub const DOGE: Self = Self::new("doge", "DOGEIRT", "DOGEUSDT", "doge");
    pub const DOT: Self = Self::new("dot", "DOTIRT", "DOTUSDT", "dot");
    pub const DYDX: Self = Self::new("dydx", "DYDXIRT", "DYDXUSDT", "dydx");
    pub const EGALA: Self = Self::new("egala", "EGALAIRT", "EGALAUSDT", "egala");
    pub const ENJ: Self = Self::new("enj", "ENJIRT", "ENJUSDT", "enj");
    pub const ENS: Self = Self::new("ens", "ENSIRT", "ENSUSDT", "ens");
    pub const EOS: Self = Self::new("eos", "EOSIRT", "EOSUSDT", "eos");
    pub const ETC: Self = Self::new("etc", "ETCIRT", "ETCUSDT", "etc");
    pub const ETH: Self = Self::new("eth", "ETHIRT", "ETHUSDT", "eth");
    pub const ETHFI: Self = Self::new("ethfi", "ETHFIIRT", "ETHFIUSDT", "ethfi");
    pub const FET: Self = Self::new("fet", "FETIRT", "FETUSDT", "fet");
    pub const FIL: Self = Self::new("fil", "FILIRT", "FILUSDT", "fil");
    pub const FLOW: Self = Self::new("flow", "FLOWIRT", "FLOWUSDT", "flow");
    pub const FTM: Self = Self::new("ftm", "FTMIRT", "FTMUSDT", "ftm");
    pub const GAL: Self = Self::new("gal", "GALIRT", "GALUSDT", "gal");
    pub const GLM: Self = Self::new("glm", "GLMIRT", "GLMUSDT", "glm");
    pub const GMX: Self = Self::new("gmx", "GMXIRT", "GMXUSDT", "gmx");
    pub const GRT: Self = Self::new("grt", "GRTIRT", "GRTUSDT", "grt");
    pub const GMT: Self = Self::new("gmt", "GMTIRT", "GMTUSDT", "gmt");
    pub const HBAR: Self = Self::new("hbar", "HBARIRT", "HBARUSDT", "hbar");
    pub const IMX: Self = Self::new("imx", "IMXIRT", "IMXUSDT", "imx");
    pub const JST: Self = Self::new("jst", "JSTIRT", "JSTUSDT", "jst");
    pub const LINK: Self = Self::new("link", "LINKIRT", "LINKUSDT", "link");
    pub const LDO: Self = Self::new("ldo", "LDOIRT", "LDOUSDT", "ldo");
    pub const LPT: Self = Self::new("lpt", "LPTIRT", "LPTUSDT", "lpt");
    pub const LRC: Self = Self::new("lrc", "LRCIRT", "LRCUSDT", "lrc");
    pub const LTC: Self = Self::new("ltc", "LTCIRT", "LTCUSDT", "ltc");
    pub const MAGIC: Self = Self::new("magic", "MAGICIRT", "MAGICUSDT", "magic");
    pub const MANA: Self = Self::new("mana", "MANAIRT", "MANAUSDT", "mana");
    pub const MATIC: Self = Self::new("matic", "MATICIRT", "MATICUSDT", "matic");
    pub const MDT: Self = Self::new("mdt", "MDTIRT", "MDTUSDT", "mdt");
    pub const MEME: Self = Self::new("meme", "MEMEIRT", "MEMEUSDT", "meme");
    pub const MKR: Self = Self::new("mkr", "MKRIRT", "MKRUSDT", "mkr");
    pub const NEAR: Self = Self::new("near", "NEARIRT", "NEARUSDT", "near");
    pub const NOT: Self = Self::new("not", "NOTIRT", "NOTUSDT", "not");
    pub const NMR: Self = Self::new("nmr", "NMRIRT", "NMRUSDT", "nmr");
    pub const OMG: Self = Self::new("omg", "OMGIRT", "OMGUSDT", "omg");
    pub const OM: Self = Self::new("om", "OMIRT", "OMUSDT", "om");
    pub const ONE: Self = Self::new("one", "ONEIRT", "ONEUSDT", "one");
    pub const QNT: Self = Self::new("qnt", "QNTIRT", "QNTUSDT", "qnt");
    pub const RDNT: Self = Self::new("rdnt", "RDNTIRT", "RDNTUSDT", "rdnt");
    pub const RNDR: Self = Self::new("rndr", "RNDRIRT", "RNDRUSDT", "rndr");
    pub const RSR: Self = Self::new("rsr", "RSRIRT", "RSRUSDT", "rsr");
    pub const SAND: Self = Self::new("sand", "SANDIRT", "SANDUSDT", "sand");
    pub const SHIB: Self = Self::new("shib", "SHIBIRT", "SHIBUSDT", "shib");
    pub const SKL: Self = Self::new("skl", "SKLIRT", "SKLUSDT", "skl");
    pub const SLP: Self = Self::new("slp", "SLPIRT", "SLPUSDT", "slp");
    pub const SNX: Self = Self::new("snx", "SNXIRT", "SNXUSDT", "snx");
    pub const SOL: Self = Self::new("sol", "SOLIRT", "SOLUSDT", "sol");
    pub const STORJ: Self = Self::new("storj", "STORJIRT", "STORJUSDT", "storj");
    pub const SSV: Self = Self::new("ssv", "SSVIRT", "SSVUSDT", "ssv");
    pub const SUSHI: Self = Self::new("sushi", "SUSHIIRT", "SUSHIUSDT", "sushi");
    pub const TON: Self = Self::new("ton", "TONIRT", "TONUSDT", "ton");
    pub const TRX: Self = Self::new("trx", "TRXIRT", "TRXUSDT", "trx");
    pub const TRB: Self = Self::new("trb", "TRBIRT", "TRBUSDT", "trb");
    pub const UNI: Self = Self::new("uni", "UNIIRT", "UNIUSDT", "uni");
    pub const UMA: Self = Self::new("uma", "UMAIRT", "UMAUSDT", "uma");
    pub const USDC: Self = Self::new("usdc", "USDCIRT", "USDCUSDT", "usdc");
    pub const USDT: Self = Self::new("usdt", "USDTIRT", "USDTUSDT", "usdt");
    pub const W: Self = Self::new("w", "WIRT", "WUSDT", "w");
    pub const WBTC: Self = Self::new("wbtc", "WBTCIRT", "WBTCUSDT", "wbtc");
    pub const WOO: Self = Self::new("woo", "WOOIRT", "WOOUSDT", "woo");
    pub const WLD: Self = Self::new("wld", "WLDIRT", "WLDUSDT", "wld");
    pub const XLM: Self = Self::new("xlm", "XLMIRT", "XLMUSDT", "xlm");
    pub const XMR: Self = Self::new("xmr", "XMRIRT", "XMRUSDT", "xmr");
    pub const XRP: Self = Self::new("xrp", "XRPIRT", "XRPUSDT", "xrp");
    pub const XTZ: Self = Self::new("xtz", "XTZIRT", "XTZUSDT", "xtz");
    pub const YFI: Self = Self::new("yfi", "YFIIRT", "YFIUSDT", "yfi");
    pub const ZRO: Self = Self::new("zro", "ZROIRT", "ZROUSDT", "zro");
    pub const ZRX: Self = Self::new("zrx", "ZRXIRT", "ZRXUSDT", "zrx");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_market_code() {
        assert_eq!(Currency::BTC.resolve(QuoteCurrency::Irt).unwrap(), "BTCIRT");
        assert_eq!(
            Currency::ETH.resolve(QuoteCurrency::Usdt).unwrap(),
            "ETHUSDT"
        );
    }

    #[test]
    fn resolve_fails_on_missing_code() {
        let bare = Currency::new("custom", "", "CUSTOMUSDT", "custom");
        let err = bare.resolve(QuoteCurrency::Irt).unwrap_err();
        match err {
            NobitexError::InvalidCurrency { name, quote } => {
                assert_eq!(name, "custom");
                assert_eq!(quote, "irt");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
