//! Hardcoded fallback ABI fragments.
//!
//! Deployments may ship their own ABI files (see [`crate::abi`]); when none
//! is available the client degrades to this minimal common surface instead
//! of hard-failing. The fragments cover exactly the calls and events the SDK
//! issues and decodes, nothing more.

use once_cell::sync::Lazy;
use web3::ethabi;

/// Router fallback: quoting, swap, liquidity mutation, and the events the
/// receipt decoder looks for.
pub const ROUTER_ABI_JSON: &str = r#"[
  {
    "type": "function",
    "name": "getAmountsOut",
    "stateMutability": "view",
    "inputs": [
      { "name": "amountIn", "type": "uint256" },
      { "name": "path", "type": "address[]" }
    ],
    "outputs": [{ "name": "amounts", "type": "uint256[]" }]
  },
  {
    "type": "function",
    "name": "swap",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "tokenIn", "type": "address" },
      { "name": "tokenOut", "type": "address" },
      { "name": "amountIn", "type": "uint256" },
      { "name": "minAmountOut", "type": "uint256" },
      { "name": "to", "type": "address" }
    ],
    "outputs": [{ "name": "amountOut", "type": "uint256" }]
  },
  {
    "type": "function",
    "name": "addLiquidity",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "pool", "type": "address" },
      { "name": "amount0Desired", "type": "uint256" },
      { "name": "amount1Desired", "type": "uint256" }
    ],
    "outputs": [{ "name": "liquidity", "type": "uint256" }]
  },
  {
    "type": "function",
    "name": "removeLiquidity",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "pool", "type": "address" },
      { "name": "shares", "type": "uint256" }
    ],
    "outputs": [
      { "name": "amount0", "type": "uint256" },
      { "name": "amount1", "type": "uint256" }
    ]
  },
  {
    "type": "event",
    "name": "Swap",
    "anonymous": false,
    "inputs": [
      { "name": "sender", "type": "address", "indexed": true },
      { "name": "tokenIn", "type": "address", "indexed": false },
      { "name": "tokenOut", "type": "address", "indexed": false },
      { "name": "amountIn", "type": "uint256", "indexed": false },
      { "name": "amountOut", "type": "uint256", "indexed": false }
    ]
  },
  {
    "type": "event",
    "name": "LiquidityAdded",
    "anonymous": false,
    "inputs": [
      { "name": "provider", "type": "address", "indexed": true },
      { "name": "pool", "type": "address", "indexed": false },
      { "name": "amount0", "type": "uint256", "indexed": false },
      { "name": "amount1", "type": "uint256", "indexed": false },
      { "name": "liquidity", "type": "uint256", "indexed": false }
    ]
  },
  {
    "type": "event",
    "name": "LiquidityRemoved",
    "anonymous": false,
    "inputs": [
      { "name": "provider", "type": "address", "indexed": true },
      { "name": "pool", "type": "address", "indexed": false },
      { "name": "amount0", "type": "uint256", "indexed": false },
      { "name": "amount1", "type": "uint256", "indexed": false },
      { "name": "liquidity", "type": "uint256", "indexed": false }
    ]
  }
]"#;

/// Factory fallback: pool creation, both pair-lookup spellings seen in the
/// wild, and the creation event pool discovery scans for.
pub const FACTORY_ABI_JSON: &str = r#"[
  {
    "type": "function",
    "name": "createPool",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "tokenA", "type": "address" },
      { "name": "tokenB", "type": "address" },
      { "name": "feeBps", "type": "uint256" }
    ],
    "outputs": [{ "name": "pool", "type": "address" }]
  },
  {
    "type": "function",
    "name": "getPair",
    "stateMutability": "view",
    "inputs": [
      { "name": "tokenA", "type": "address" },
      { "name": "tokenB", "type": "address" }
    ],
    "outputs": [{ "name": "pair", "type": "address" }]
  },
  {
    "type": "function",
    "name": "getPool",
    "stateMutability": "view",
    "inputs": [
      { "name": "tokenA", "type": "address" },
      { "name": "tokenB", "type": "address" }
    ],
    "outputs": [{ "name": "pool", "type": "address" }]
  },
  {
    "type": "event",
    "name": "PoolCreated",
    "anonymous": false,
    "inputs": [
      { "name": "token0", "type": "address", "indexed": true },
      { "name": "token1", "type": "address", "indexed": true },
      { "name": "feeBps", "type": "uint256", "indexed": false },
      { "name": "pool", "type": "address", "indexed": false }
    ]
  }
]"#;

/// Pool fallback: the state reads behind pool info and the constant-product
/// estimate, plus both liquidity-balance spellings.
pub const POOL_ABI_JSON: &str = r#"[
  {
    "type": "function",
    "name": "getReserves",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [
      { "name": "reserve0", "type": "uint112" },
      { "name": "reserve1", "type": "uint112" },
      { "name": "blockTimestampLast", "type": "uint32" }
    ]
  },
  {
    "type": "function",
    "name": "token0",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [{ "name": "", "type": "address" }]
  },
  {
    "type": "function",
    "name": "token1",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [{ "name": "", "type": "address" }]
  },
  {
    "type": "function",
    "name": "feeBps",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [{ "name": "", "type": "uint256" }]
  },
  {
    "type": "function",
    "name": "totalSupply",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [{ "name": "", "type": "uint256" }]
  },
  {
    "type": "function",
    "name": "liquidityOf",
    "stateMutability": "view",
    "inputs": [{ "name": "owner", "type": "address" }],
    "outputs": [{ "name": "", "type": "uint256" }]
  },
  {
    "type": "function",
    "name": "balanceOf",
    "stateMutability": "view",
    "inputs": [{ "name": "owner", "type": "address" }],
    "outputs": [{ "name": "", "type": "uint256" }]
  }
]"#;

/// ERC-20 fallback: the allowance/approve pair the submission flows need.
pub const ERC20_ABI_JSON: &str = r#"[
  {
    "type": "function",
    "name": "allowance",
    "stateMutability": "view",
    "inputs": [
      { "name": "owner", "type": "address" },
      { "name": "spender", "type": "address" }
    ],
    "outputs": [{ "name": "", "type": "uint256" }]
  },
  {
    "type": "function",
    "name": "approve",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "spender", "type": "address" },
      { "name": "amount", "type": "uint256" }
    ],
    "outputs": [{ "name": "", "type": "bool" }]
  },
  {
    "type": "function",
    "name": "balanceOf",
    "stateMutability": "view",
    "inputs": [{ "name": "owner", "type": "address" }],
    "outputs": [{ "name": "", "type": "uint256" }]
  },
  {
    "type": "function",
    "name": "decimals",
    "stateMutability": "view",
    "inputs": [],
    "outputs": [{ "name": "", "type": "uint8" }]
  }
]"#;

fn parse(json: &str, which: &str) -> ethabi::Contract {
    serde_json::from_str(json)
        .unwrap_or_else(|err| panic!("builtin {which} ABI fragment is invalid: {err}"))
}

pub static ROUTER_ABI: Lazy<ethabi::Contract> = Lazy::new(|| parse(ROUTER_ABI_JSON, "router"));
pub static FACTORY_ABI: Lazy<ethabi::Contract> = Lazy::new(|| parse(FACTORY_ABI_JSON, "factory"));
pub static POOL_ABI: Lazy<ethabi::Contract> = Lazy::new(|| parse(POOL_ABI_JSON, "pool"));
pub static ERC20_ABI: Lazy<ethabi::Contract> = Lazy::new(|| parse(ERC20_ABI_JSON, "erc20"));
