//! Advisory swap quoting.
//!
//! Two estimation paths, tried in order, first success wins: the router's
//! own `getAmountsOut`, then a direct pair lookup against the factory with a
//! client-side constant-product estimate over the pool's reserves. The
//! estimate ignores protocol fees, price impact beyond the reserve snapshot,
//! and multi-hop routing; it is advisory, never a settlement guarantee.

use anyhow::Context;
use tracing::debug;
use web3::contract::{Contract, Options};
use web3::types::{Address, U256};
use web3::{Transport, Web3, ethabi};

use crate::abi::{resolve_factory_abi, resolve_pool_abi, resolve_router_abi};
use crate::amm::types::QuoteRequest;
use crate::error::Result;
use crate::utils::{from_base_units, to_base_units};

/// Fee-free constant-product output estimate:
/// `floor(amount_in * reserve_out / reserve_in)`.
///
/// Computed through a 512-bit intermediate so large reserves cannot overflow,
/// and with no floating point anywhere. An empty input reserve (or a result
/// that cannot fit 256 bits) means there is no meaningful quote.
pub fn constant_product_out(
    amount_in: U256,
    reserve_in: U256,
    reserve_out: U256,
) -> Option<U256> {
    if reserve_in.is_zero() {
        return None;
    }
    let scaled = amount_in.full_mul(reserve_out) / reserve_in;
    let mut be = [0u8; 64];
    scaled.to_big_endian(&mut be);
    if be[..32].iter().any(|b| *b != 0) {
        return None;
    }
    Some(U256::from_big_endian(&be[32..]))
}

/// Estimate the output of swapping `request.amount_in` of `token_in` for
/// `token_out`, rendered as a human-readable decimal string through
/// `request.decimals_out`.
///
/// Returns `Ok(None)` when no estimation path succeeds; only malformed input
/// amounts are an error. The factory fallback is skipped when no factory
/// address is supplied.
pub async fn get_quote<T: Transport>(
    web3: &Web3<T>,
    router: Address,
    request: &QuoteRequest,
    router_abi: Option<ethabi::Contract>,
    factory: Option<Address>,
    factory_abi: Option<ethabi::Contract>,
) -> Result<Option<String>> {
    let amount_in = to_base_units(&request.amount_in, request.decimals_in)?;

    match router_amounts_out(web3, router, router_abi, request, amount_in).await {
        Ok(amount_out) => return Ok(Some(from_base_units(amount_out, request.decimals_out))),
        Err(err) => {
            debug!(%router, err = %err, "router quote failed, trying direct pair lookup")
        }
    }

    let Some(factory) = factory else {
        return Ok(None);
    };
    match pair_quote(web3, factory, factory_abi, request, amount_in).await {
        Ok(amount_out) => Ok(amount_out.map(|v| from_base_units(v, request.decimals_out))),
        Err(err) => {
            debug!(%factory, err = %err, "direct pair quote failed, no quote available");
            Ok(None)
        }
    }
}

/// Path 1: ask the router for a two-token path and take the final hop.
async fn router_amounts_out<T: Transport>(
    web3: &Web3<T>,
    router: Address,
    abi_override: Option<ethabi::Contract>,
    request: &QuoteRequest,
    amount_in: U256,
) -> anyhow::Result<U256> {
    let contract = Contract::new(web3.eth(), router, resolve_router_abi(abi_override));
    let amounts: Vec<U256> = contract
        .query(
            "getAmountsOut",
            (amount_in, vec![request.token_in, request.token_out]),
            None,
            Options::default(),
            None,
        )
        .await?;
    amounts.last().copied().context("router returned an empty amounts path")
}

/// Path 2: resolve the pair through the factory and price against its raw
/// reserves. Factory interfaces vary, so both lookup spellings are tried.
async fn pair_quote<T: Transport>(
    web3: &Web3<T>,
    factory: Address,
    abi_override: Option<ethabi::Contract>,
    request: &QuoteRequest,
    amount_in: U256,
) -> anyhow::Result<Option<U256>> {
    let contract = Contract::new(web3.eth(), factory, resolve_factory_abi(abi_override));

    let mut pair = None;
    for method in ["getPair", "getPool"] {
        match contract
            .query::<Address, _, _, _>(
                method,
                (request.token_in, request.token_out),
                None,
                Options::default(),
                None,
            )
            .await
        {
            Ok(address) => {
                pair = Some(address);
                break;
            }
            Err(err) => debug!(method, err = %err, "factory lookup attempt failed"),
        }
    }
    let pair = pair.context("no factory lookup method succeeded")?;
    if pair.is_zero() {
        return Ok(None);
    }

    let pool = Contract::new(web3.eth(), pair, resolve_pool_abi(None));
    let (reserve0, reserve1, _): (U256, U256, U256) =
        pool.query("getReserves", (), None, Options::default(), None).await?;
    let token0: Address = pool.query("token0", (), None, Options::default(), None).await?;

    let (reserve_in, reserve_out) = if token0 == request.token_in {
        (reserve0, reserve1)
    } else {
        (reserve1, reserve0)
    };
    Ok(constant_product_out(amount_in, reserve_in, reserve_out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::mock_rpc::MockTransport;
    use serde_json::json;
    use web3::ethabi::Token;

    fn eth_call_result(tokens: &[Token]) -> serde_json::Value {
        json!(format!("0x{}", hex::encode(ethabi::encode(tokens))))
    }

    fn request() -> QuoteRequest {
        QuoteRequest {
            token_in: Address::from_low_u64_be(0xaa),
            token_out: Address::from_low_u64_be(0xbb),
            amount_in: "1000".to_string(),
            decimals_in: 0,
            decimals_out: 0,
        }
    }

    #[test]
    fn constant_product_matches_the_floor_formula() {
        let out = constant_product_out(
            U256::from(1_000u64),
            U256::from(1_000_000u64),
            U256::from(2_000_000u64),
        )
        .unwrap();
        assert_eq!(out, U256::from(2_000u64));

        // Floor division: 7 * 3 / 2 = 10, not 10.5.
        let out =
            constant_product_out(U256::from(7u64), U256::from(2u64), U256::from(3u64)).unwrap();
        assert_eq!(out, U256::from(10u64));
    }

    #[test]
    fn output_never_exceeds_reserve_out_for_partial_input() {
        let reserve_in = U256::from(5_000_000u64);
        let reserve_out = U256::from(9_000_000u64);
        for amount in [0u64, 1, 999, 5_000_000] {
            let out =
                constant_product_out(U256::from(amount), reserve_in, reserve_out).unwrap();
            assert!(out <= reserve_out);
        }
    }

    #[test]
    fn empty_input_reserve_yields_no_quote() {
        assert_eq!(
            constant_product_out(U256::from(1u64), U256::zero(), U256::from(1u64)),
            None
        );
    }

    #[test]
    fn huge_operands_do_not_overflow() {
        // amount_in * reserve_out overflows 256 bits; the quotient does not.
        let amount_in = U256::exp10(40);
        let reserve_in = U256::exp10(40);
        let reserve_out = U256::exp10(40);
        assert_eq!(
            constant_product_out(amount_in, reserve_in, reserve_out),
            Some(U256::exp10(40))
        );
    }

    #[test]
    fn quotient_beyond_256_bits_yields_no_quote() {
        let out = constant_product_out(U256::MAX, U256::from(1u64), U256::from(2u64));
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn router_path_returns_the_final_hop() {
        let transport = MockTransport::new();
        transport.respond(
            "eth_call",
            eth_call_result(&[Token::Array(vec![
                Token::Uint(1000u64.into()),
                Token::Uint(1950u64.into()),
            ])]),
        );
        let web3 = Web3::new(transport);

        let quote = get_quote(
            &web3,
            Address::from_low_u64_be(0x01),
            &request(),
            None,
            None,
            None,
        )
        .await
        .unwrap();
        assert_eq!(quote.as_deref(), Some("1950"));
    }

    #[tokio::test]
    async fn quote_is_rendered_through_the_output_decimals() {
        let transport = MockTransport::new();
        transport.respond(
            "eth_call",
            eth_call_result(&[Token::Array(vec![
                Token::Uint(1000u64.into()),
                Token::Uint(1_500_000u64.into()),
            ])]),
        );
        let web3 = Web3::new(transport);

        let mut req = request();
        req.decimals_out = 6;
        let quote = get_quote(&web3, Address::from_low_u64_be(0x01), &req, None, None, None)
            .await
            .unwrap();
        assert_eq!(quote.as_deref(), Some("1.5"));
    }

    #[tokio::test]
    async fn falls_back_to_reserves_when_the_router_reverts() {
        let transport = MockTransport::new();
        // getAmountsOut reverts, getPair resolves, then reserves and token0.
        transport.respond_error("eth_call", "execution reverted");
        transport.respond(
            "eth_call",
            eth_call_result(&[Token::Address(Address::from_low_u64_be(0xcc))]),
        );
        transport.respond(
            "eth_call",
            eth_call_result(&[
                Token::Uint(1_000_000u64.into()),
                Token::Uint(2_000_000u64.into()),
                Token::Uint(0u64.into()),
            ]),
        );
        transport.respond(
            "eth_call",
            eth_call_result(&[Token::Address(Address::from_low_u64_be(0xaa))]),
        );
        let web3 = Web3::new(transport);

        let quote = get_quote(
            &web3,
            Address::from_low_u64_be(0x01),
            &request(),
            None,
            Some(Address::from_low_u64_be(0x02)),
            None,
        )
        .await
        .unwrap();
        assert_eq!(quote.as_deref(), Some("2000"));
    }

    #[tokio::test]
    async fn reserves_are_oriented_by_token0() {
        let transport = MockTransport::new();
        transport.respond_error("eth_call", "execution reverted");
        transport.respond(
            "eth_call",
            eth_call_result(&[Token::Address(Address::from_low_u64_be(0xcc))]),
        );
        transport.respond(
            "eth_call",
            eth_call_result(&[
                Token::Uint(2_000_000u64.into()),
                Token::Uint(1_000_000u64.into()),
                Token::Uint(0u64.into()),
            ]),
        );
        // token0 is the *output* token, so the reserves must flip.
        transport.respond(
            "eth_call",
            eth_call_result(&[Token::Address(Address::from_low_u64_be(0xbb))]),
        );
        let web3 = Web3::new(transport);

        let quote = get_quote(
            &web3,
            Address::from_low_u64_be(0x01),
            &request(),
            None,
            Some(Address::from_low_u64_be(0x02)),
            None,
        )
        .await
        .unwrap();
        assert_eq!(quote.as_deref(), Some("2000"));
    }

    #[tokio::test]
    async fn zero_pair_address_means_no_quote() {
        let transport = MockTransport::new();
        transport.respond_error("eth_call", "execution reverted");
        transport.respond("eth_call", eth_call_result(&[Token::Address(Address::zero())]));
        let web3 = Web3::new(transport.clone());

        let quote = get_quote(
            &web3,
            Address::from_low_u64_be(0x01),
            &request(),
            None,
            Some(Address::from_low_u64_be(0x02)),
            None,
        )
        .await
        .unwrap();
        assert_eq!(quote, None);
        // No reserve read was attempted after the zero pair.
        assert_eq!(transport.calls_of("eth_call"), 2);
    }

    #[tokio::test]
    async fn all_paths_failing_yields_none_not_an_error() {
        let transport = MockTransport::new();
        for _ in 0..3 {
            transport.respond_error("eth_call", "execution reverted");
        }
        let web3 = Web3::new(transport);

        let quote = get_quote(
            &web3,
            Address::from_low_u64_be(0x01),
            &request(),
            None,
            Some(Address::from_low_u64_be(0x02)),
            None,
        )
        .await
        .unwrap();
        assert_eq!(quote, None);
    }

    #[tokio::test]
    async fn no_factory_configured_skips_the_fallback() {
        let transport = MockTransport::new();
        transport.respond_error("eth_call", "execution reverted");
        let web3 = Web3::new(transport.clone());

        let quote =
            get_quote(&web3, Address::from_low_u64_be(0x01), &request(), None, None, None)
                .await
                .unwrap();
        assert_eq!(quote, None);
        assert_eq!(transport.calls_of("eth_call"), 1);
    }

    #[tokio::test]
    async fn malformed_amount_is_an_input_error() {
        let transport = MockTransport::new();
        let web3 = Web3::new(transport);
        let mut req = request();
        req.amount_in = "1.2.3".to_string();

        let result =
            get_quote(&web3, Address::from_low_u64_be(0x01), &req, None, None, None).await;
        assert!(result.is_err());
    }
}
