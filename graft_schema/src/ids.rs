// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Well-known ids of the meta-schema.
//!
//! These values are stable: documents saved against one build of the core
//! library refer to them by id.

/// Field labels.
pub mod field {
    use graft_id::Guid;

    /// The constructor of a node.
    pub const CTOR: Guid = Guid::from_u128(0xaba6ac79fd3d409da860a77c90942852);
    /// A display name.
    pub const NAME: Guid = Guid::from_u128(0x169a81aefca74e92b45e3fa03c7021df);
    /// The fields of a constructor.
    pub const FIELDS: Guid = Guid::from_u128(0x210a5f0ea35c4677bf37192a69f0fb84);
    /// The declared type of a field, or the element type of a list type.
    pub const TYPE: Guid = Guid::from_u128(0x223a9b55b8a1413497879a52e5dea939);
    /// The element of a cons cell.
    pub const HEAD: Guid = Guid::from_u128(0xa74851b7a58f4e52b72ee719b258a7b1);
    /// The rest of a cons list.
    pub const TAIL: Guid = Guid::from_u128(0xe53f14ab72eb40f590e5ae53fb53e988);
    /// Members of an algebraic type, or definitions of a module.
    pub const CTOR_OR_ALGEBRAIC_TYPES: Guid = Guid::from_u128(0x1088fc911436441ca7f0b569fcf72da5);
    /// The display template of a render-ctor.
    pub const D: Guid = Guid::from_u128(0x06468db341494c6d0f1a1113453b5284);
    /// The constructor a renderer applies to.
    pub const FOR_CTOR: Guid = Guid::from_u128(0xd176160129babb7724ec2656ece7d7a1);
    /// A renderer applied beneath a descend or list.
    pub const CONTEXT_RENDER: Guid = Guid::from_u128(0x908e3614a53ec485765099f4f88ffd5e);
    /// Children of a block or line template.
    pub const CHILDREN: Guid = Guid::from_u128(0x55944d181e596b9c1642f9687ac9fcd5);
    /// The content of a label template.
    pub const CHILD: Guid = Guid::from_u128(0xb8b38542590248fddea03aa7faa9004c);
    /// The field a descend or label template follows.
    pub const FIELD: Guid = Guid::from_u128(0x023d9b535e0883d5f247049a587d41d6);
    /// Opening bracket of a rendered list.
    pub const OPENING: Guid = Guid::from_u128(0xcf1d43a4cb7bbe296f2d38c65f36cd2a);
    /// Closing bracket of a rendered list.
    pub const CLOSING: Guid = Guid::from_u128(0x022d34a8b5652176e825bb0440454ab2);
    /// Separator between rendered list items.
    pub const SEPARATOR: Guid = Guid::from_u128(0xce030d314931a9df1ba07c298b0cad90);
    /// Alternatives of a dispatch renderer.
    pub const RENDERS: Guid = Guid::from_u128(0xabb3a705a157db4b6f2b0ae1a75f6439);
    /// Renderers contributed by a module.
    pub const RENDER_CTORS: Guid = Guid::from_u128(0xbc20a35da250d825fc8af115d52f879f);
    /// Arbitrary content carried by a module.
    pub const DATA: Guid = Guid::from_u128(0xd4220640231679254ebab0c7ab0ba283);
}

/// Constructors.
pub mod ctor {
    use graft_id::Guid;

    /// Constructor of constructors.
    pub const CTOR: Guid = Guid::from_u128(0xe35d27082ac44a759a4e4c0535f243d7);
    /// Constructor of fields.
    pub const FIELD: Guid = Guid::from_u128(0xa963494fb49742f4a0a2b12011ac3cbe);
    /// Constructor of algebraic types.
    pub const ALGEBRAIC_TYPE: Guid = Guid::from_u128(0xba181d67665d4e57b9fa1694dbdacbca);
    /// Constructor of list types.
    pub const LIST_TYPE: Guid = Guid::from_u128(0x6410d2232b824a38bf61780cc1a12886);
    /// Constructor of atomic types.
    pub const ATOMIC_TYPE: Guid = Guid::from_u128(0x4e63cb391b72641490acd1b3e2619ddb);
    /// The end of a cons list.
    pub const EMPTY_LIST: Guid = Guid::from_u128(0x51fb7a7a95d4486bb197509fd53dec2d);
    /// A cons cell.
    pub const NONEMPTY_LIST: Guid = Guid::from_u128(0xf0408beb29c74dc7bc20dc461104e949);
    /// A named group of definitions and renderers.
    pub const MODULE: Guid = Guid::from_u128(0x3c0e5c714e551ef48390f803fa17569b);
    /// A display template for one constructor.
    pub const RENDER_CTOR: Guid = Guid::from_u128(0xe4ba7b3350b6ba78485c3b0fe66d74e7);
    /// A bracketed list renderer.
    pub const RENDER_LIST: Guid = Guid::from_u128(0xbfe62ce7b212eb753823b3a5f244c404);
    /// A renderer showing only a node's name.
    pub const RENDER_NAME_SHALLOW: Guid = Guid::from_u128(0xbcb942240e9f0e111b0cf985360c5188);
    /// A renderer trying alternatives in order.
    pub const DISPATCH: Guid = Guid::from_u128(0xdb98a62666a14eb8d942ec1b82ffdb70);
    /// Vertical template group.
    pub const BLOCK: Guid = Guid::from_u128(0x69578eb3ad4ec4d286443c21cf1d78fc);
    /// Horizontal template group.
    pub const LINE: Guid = Guid::from_u128(0x732ed87bdb114213ddaf17ce6b167d9c);
    /// Template descending into a field.
    pub const DESCEND: Guid = Guid::from_u128(0x7a6f518f8b877cf182c427e98e65a5b5);
    /// Template captioning content with a field.
    pub const LABEL: Guid = Guid::from_u128(0x50b7b81fb70b4b32a57953d88563a3e0);
}

/// Types.
pub mod ty {
    use graft_id::Guid;

    /// Strings.
    pub const STRING: Guid = Guid::from_u128(0x70d1d53107174f88858da0cdad6050d5);
    /// Numbers.
    pub const NUMBER: Guid = Guid::from_u128(0xf97bcfc1c3a84a45958307a512f05954);
    /// Any type: algebraic, list, ctor or atomic.
    pub const TYPE: Guid = Guid::from_u128(0x17458686b71245d092a8c930140c32c5);
    /// Any renderer.
    pub const RENDER: Guid = Guid::from_u128(0x7634a89a08a742f2b066a653a77eaf38);
    /// Any display template.
    pub const D: Guid = Guid::from_u128(0xbd8d3304703a4031a65dbd5f7588168c);
    /// List of fields.
    pub const LIST_OF_FIELD: Guid = Guid::from_u128(0x196bceca995d4ec5b3fbde6d347b027e);
    /// List of types.
    pub const LIST_OF_TYPE: Guid = Guid::from_u128(0x4eaaf63303344f62accb95c24c867f97);
    /// List of renderers.
    pub const LIST_OF_RENDER: Guid = Guid::from_u128(0x4f8a5326f43149deb97a861ec717ed65);
    /// List of display templates.
    pub const LIST_OF_D: Guid = Guid::from_u128(0x48980098c9e346afb409d9fc2417c73d);
    /// List of render-ctors.
    pub const LIST_OF_RENDER_CTOR: Guid = Guid::from_u128(0xa1440c7a7ee24f01b8c688c5b9ebc2c1);
}

/// The root module of the core library.
pub const CORE_MODULE: graft_id::Guid =
    graft_id::Guid::from_u128(0x6b831961f5e64f8b8ef204ec7c2c8b67);
