//! Member tables for the built-in (non-exception) types.

pub(super) struct TypeDef {
    pub name: &'static str,
    pub bases: &'static [&'static str],
    pub doc: &'static str,
    pub methods: &'static [&'static str],
    pub class_methods: &'static [&'static str],
    pub static_methods: &'static [&'static str],
    pub slots: &'static [&'static str],
    pub descriptors: &'static [&'static str],
    pub fields: &'static [&'static str],
    /// Instances define `__hash__ = None`.
    pub unhashable: bool,
}

impl TypeDef {
    const EMPTY: Self = Self {
        name: "",
        bases: &["object"],
        doc: "",
        methods: &[],
        class_methods: &[],
        static_methods: &["__new__"],
        slots: &[],
        descriptors: &[],
        fields: &[],
        unhashable: false,
    };
}

const ITERATOR_SLOTS: &[&str] = &["__getattribute__", "__iter__", "__next__"];

const INT_SLOTS: &[&str] = &[
    "__abs__", "__add__", "__and__", "__bool__", "__divmod__", "__eq__", "__float__",
    "__floordiv__", "__ge__", "__getattribute__", "__gt__", "__hash__", "__index__", "__int__",
    "__invert__", "__le__", "__lshift__", "__lt__", "__mod__", "__mul__", "__ne__", "__neg__",
    "__or__", "__pos__", "__pow__", "__radd__", "__rand__", "__rdivmod__", "__repr__",
    "__rfloordiv__", "__rlshift__", "__rmod__", "__rmul__", "__ror__", "__rpow__",
    "__rrshift__", "__rshift__", "__rsub__", "__rtruediv__", "__rxor__", "__sub__",
    "__truediv__", "__xor__",
];

const FLOAT_SLOTS: &[&str] = &[
    "__abs__", "__add__", "__bool__", "__divmod__", "__eq__", "__float__", "__floordiv__",
    "__ge__", "__getattribute__", "__gt__", "__hash__", "__int__", "__le__", "__lt__",
    "__mod__", "__mul__", "__ne__", "__neg__", "__pos__", "__pow__", "__radd__", "__rdivmod__",
    "__repr__", "__rfloordiv__", "__rmod__", "__rmul__", "__rpow__", "__rsub__",
    "__rtruediv__", "__sub__", "__truediv__",
];

const COMPLEX_SLOTS: &[&str] = &[
    "__abs__", "__add__", "__bool__", "__eq__", "__ge__", "__getattribute__", "__gt__",
    "__hash__", "__le__", "__lt__", "__mul__", "__ne__", "__neg__", "__pos__", "__pow__",
    "__radd__", "__repr__", "__rmul__", "__rpow__", "__rsub__", "__rtruediv__", "__sub__",
    "__truediv__",
];

const STR_SLOTS: &[&str] = &[
    "__add__", "__contains__", "__eq__", "__ge__", "__getattribute__", "__gt__", "__hash__",
    "__iter__", "__le__", "__len__", "__lt__", "__mod__", "__mul__", "__ne__", "__repr__",
    "__rmod__", "__rmul__", "__str__",
];

const BYTES_SLOTS: &[&str] = &[
    "__add__", "__buffer__", "__contains__", "__eq__", "__ge__", "__getattribute__",
    "__getitem__", "__gt__", "__hash__", "__iter__", "__le__", "__len__", "__lt__", "__mod__",
    "__mul__", "__ne__", "__repr__", "__rmod__", "__rmul__",
];

const BYTES_METHODS: &[&str] = &[
    "__bytes__", "__getnewargs__", "capitalize", "center", "count", "decode", "endswith",
    "expandtabs", "find", "hex", "index", "isalnum", "isalpha", "isascii", "isdigit",
    "islower", "isspace", "istitle", "isupper", "join", "ljust", "lower", "lstrip",
    "partition", "removeprefix", "removesuffix", "replace", "rfind", "rindex", "rjust",
    "rpartition", "rsplit", "rstrip", "split", "splitlines", "startswith", "strip",
    "swapcase", "title", "translate", "upper", "zfill",
];

const BYTEARRAY_METHODS: &[&str] = &[
    "__alloc__", "__reduce__", "__reduce_ex__", "__sizeof__", "append", "capitalize",
    "center", "clear", "copy", "count", "decode", "endswith", "expandtabs", "extend", "find",
    "hex", "index", "insert", "isalnum", "isalpha", "isascii", "isdigit", "islower",
    "isspace", "istitle", "isupper", "join", "ljust", "lower", "lstrip", "partition", "pop",
    "remove", "removeprefix", "removesuffix", "replace", "reverse", "rfind", "rindex",
    "rjust", "rpartition", "rsplit", "rstrip", "split", "splitlines", "startswith", "strip",
    "swapcase", "title", "translate", "upper", "zfill",
];

const BYTEARRAY_SLOTS: &[&str] = &[
    "__add__", "__buffer__", "__contains__", "__delitem__", "__eq__", "__ge__",
    "__getattribute__", "__getitem__", "__gt__", "__iadd__", "__imul__", "__init__",
    "__iter__", "__le__", "__len__", "__lt__", "__mod__", "__mul__", "__ne__",
    "__release_buffer__", "__repr__", "__rmod__", "__rmul__", "__setitem__", "__str__",
];

const LIST_SLOTS: &[&str] = &[
    "__add__", "__contains__", "__delitem__", "__eq__", "__ge__", "__getattribute__", "__gt__",
    "__iadd__", "__imul__", "__init__", "__iter__", "__le__", "__len__", "__lt__", "__mul__",
    "__ne__", "__repr__", "__rmul__", "__setitem__",
];

const TUPLE_SLOTS: &[&str] = &[
    "__add__", "__contains__", "__eq__", "__ge__", "__getattribute__", "__getitem__", "__gt__",
    "__hash__", "__iter__", "__le__", "__len__", "__lt__", "__mul__", "__ne__", "__repr__",
    "__rmul__",
];

const DICT_SLOTS: &[&str] = &[
    "__delitem__", "__eq__", "__ge__", "__getattribute__", "__gt__", "__init__", "__ior__",
    "__iter__", "__le__", "__len__", "__lt__", "__ne__", "__or__", "__repr__", "__ror__",
    "__setitem__",
];

const SET_SLOTS: &[&str] = &[
    "__and__", "__eq__", "__ge__", "__getattribute__", "__gt__", "__iand__", "__init__",
    "__ior__", "__isub__", "__iter__", "__ixor__", "__le__", "__len__", "__lt__", "__ne__",
    "__or__", "__rand__", "__repr__", "__ror__", "__rsub__", "__rxor__", "__sub__", "__xor__",
];

const FROZENSET_SLOTS: &[&str] = &[
    "__and__", "__eq__", "__ge__", "__getattribute__", "__gt__", "__hash__", "__iter__",
    "__le__", "__len__", "__lt__", "__ne__", "__or__", "__rand__", "__repr__", "__ror__",
    "__rsub__", "__rxor__", "__sub__", "__xor__",
];

const SET_COMMON: &[&str] = &[
    "__contains__", "__reduce__", "__sizeof__", "copy", "difference", "intersection",
    "isdisjoint", "issubset", "issuperset", "symmetric_difference", "union",
];

const RANGE_SLOTS: &[&str] = &[
    "__bool__", "__contains__", "__eq__", "__ge__", "__getattribute__", "__getitem__",
    "__gt__", "__hash__", "__iter__", "__le__", "__len__", "__lt__", "__ne__", "__repr__",
];

const MEMORYVIEW_SLOTS: &[&str] = &[
    "__buffer__", "__delitem__", "__eq__", "__ge__", "__getattribute__", "__getitem__",
    "__gt__", "__hash__", "__iter__", "__le__", "__len__", "__lt__", "__ne__", "__repr__",
    "__setitem__",
];

const SLICE_SLOTS: &[&str] = &[
    "__eq__", "__ge__", "__gt__", "__hash__", "__le__", "__lt__", "__ne__", "__repr__",
];

pub(super) const OBJECT: TypeDef = TypeDef {
    name: "object",
    bases: &[],
    doc: "The base class of the class hierarchy.\n\nWhen called, it accepts no arguments and returns a new featureless\ninstance that has no instance attributes and cannot be given any.\n",
    methods: &[
        "__dir__", "__format__", "__getstate__", "__reduce__", "__reduce_ex__", "__sizeof__",
    ],
    class_methods: &["__init_subclass__", "__subclasshook__"],
    slots: &[
        "__delattr__", "__eq__", "__ge__", "__getattribute__", "__gt__", "__hash__", "__init__",
        "__le__", "__lt__", "__ne__", "__repr__", "__setattr__", "__str__",
    ],
    descriptors: &["__class__"],
    ..TypeDef::EMPTY
};

/// Every built-in type other than `object`, ordered so that bases come first.
pub(super) const TYPES: &[TypeDef] = &[
    TypeDef {
        name: "type",
        doc: "type(object) -> the object's type\ntype(name, bases, dict, **kwds) -> a new type",
        methods: &[
            "__dir__", "__instancecheck__", "__sizeof__", "__subclasscheck__", "__subclasses__",
            "mro",
        ],
        class_methods: &["__prepare__"],
        slots: &[
            "__call__", "__delattr__", "__getattribute__", "__init__", "__or__", "__repr__",
            "__ror__", "__setattr__",
        ],
        descriptors: &[
            "__abstractmethods__", "__annotations__", "__dict__", "__module__", "__name__",
            "__qualname__", "__text_signature__", "__type_params__",
        ],
        fields: &[
            "__base__", "__basicsize__", "__bases__", "__dictoffset__", "__flags__",
            "__itemsize__", "__mro__", "__weakrefoffset__",
        ],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "int",
        doc: "int([x]) -> integer\nint(x, base=10) -> integer\n\nConvert a number or string to an integer, or return 0 if no arguments\nare given.  If x is a number, return x.__int__().  For floating point\nnumbers, this truncates towards zero.\n\nIf x is not a number or if base is given, then x must be a string,\nbytes, or bytearray instance representing an integer literal in the\ngiven base.  The literal can be preceded by '+' or '-' and be surrounded\nby whitespace.  The base defaults to 10.  Valid bases are 0 and 2-36.\nBase 0 means to interpret the base from the string as an integer literal.\n>>> int('0b100', base=0)\n4",
        methods: &[
            "__ceil__", "__floor__", "__format__", "__getnewargs__", "__round__", "__sizeof__",
            "__trunc__", "as_integer_ratio", "bit_count", "bit_length", "conjugate",
            "is_integer", "to_bytes",
        ],
        class_methods: &["from_bytes"],
        slots: INT_SLOTS,
        descriptors: &["denominator", "imag", "numerator", "real"],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "bool",
        bases: &["int"],
        doc: "Returns True when the argument is true, False otherwise.\nThe builtins True and False are the only two instances of the class bool.\nThe class bool is a subclass of the class int, and cannot be subclassed.",
        slots: &[
            "__and__", "__invert__", "__or__", "__rand__", "__repr__", "__ror__", "__rxor__",
            "__xor__",
        ],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "float",
        doc: "Convert a string or number to a floating point number, if possible.",
        methods: &[
            "__ceil__", "__floor__", "__format__", "__getnewargs__", "__round__", "__trunc__",
            "as_integer_ratio", "conjugate", "hex", "is_integer",
        ],
        class_methods: &["__getformat__", "fromhex"],
        slots: FLOAT_SLOTS,
        descriptors: &["imag", "real"],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "complex",
        doc: "Create a complex number from a real part and an optional imaginary part.\n\nThis is equivalent to (real + imag*1j) where imag defaults to 0.",
        methods: &["__complex__", "__format__", "__getnewargs__", "conjugate"],
        slots: COMPLEX_SLOTS,
        fields: &["imag", "real"],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "str",
        doc: "str(object='') -> str\nstr(bytes_or_buffer[, encoding[, errors]]) -> str\n\nCreate a new string object from the given object. If encoding or\nerrors is specified, then the object must expose a data buffer\nthat will be decoded using the given encoding and error handler.\nOtherwise, returns the result of object.__str__() (if defined)\nor repr(object).\nencoding defaults to sys.getdefaultencoding().\nerrors defaults to 'strict'.",
        methods: &[
            "__format__", "__getitem__", "__getnewargs__", "__sizeof__", "capitalize",
            "casefold", "center", "count", "encode", "endswith", "expandtabs", "find", "format",
            "format_map", "index", "isalnum", "isalpha", "isascii", "isdecimal", "isdigit",
            "isidentifier", "islower", "isnumeric", "isprintable", "isspace", "istitle",
            "isupper", "join", "ljust", "lower", "lstrip", "partition", "removeprefix",
            "removesuffix", "replace", "rfind", "rindex", "rjust", "rpartition", "rsplit",
            "rstrip", "split", "splitlines", "startswith", "strip", "swapcase", "title",
            "translate", "upper", "zfill",
        ],
        static_methods: &["__new__", "maketrans"],
        slots: STR_SLOTS,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "bytes",
        doc: "bytes(iterable_of_ints) -> bytes\nbytes(string, encoding[, errors]) -> bytes\nbytes(bytes_or_buffer) -> immutable copy of bytes_or_buffer\nbytes(int) -> bytes object of size given by the parameter initialized with null bytes\nbytes() -> empty bytes object\n\nConstruct an immutable array of bytes from:\n  - an iterable yielding integers in range(256)\n  - a text string encoded using the specified encoding\n  - any object implementing the buffer API.\n  - an integer",
        methods: BYTES_METHODS,
        class_methods: &["fromhex"],
        static_methods: &["__new__", "maketrans"],
        slots: BYTES_SLOTS,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "bytearray",
        doc: "bytearray(iterable_of_ints) -> bytearray\nbytearray(string, encoding[, errors]) -> bytearray\nbytearray(bytes_or_buffer) -> mutable copy of bytes_or_buffer\nbytearray(int) -> bytes array of size given by the parameter initialized with null bytes\nbytearray() -> empty bytes array\n\nConstruct a mutable bytearray object from:\n  - an iterable yielding integers in range(256)\n  - a text string encoded using the specified encoding\n  - a bytes or a buffer object\n  - any object implementing the buffer API.\n  - an integer",
        methods: BYTEARRAY_METHODS,
        class_methods: &["fromhex"],
        static_methods: &["__new__", "maketrans"],
        slots: BYTEARRAY_SLOTS,
        unhashable: true,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "memoryview",
        doc: "Create a new memoryview object which references the given object.",
        methods: &[
            "__enter__", "__exit__", "__release_buffer__", "cast", "hex", "release", "tobytes",
            "tolist", "toreadonly",
        ],
        slots: MEMORYVIEW_SLOTS,
        descriptors: &[
            "c_contiguous", "contiguous", "f_contiguous", "format", "itemsize", "nbytes", "ndim",
            "obj", "readonly", "shape", "strides", "suboffsets",
        ],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "list",
        doc: "Built-in mutable sequence.\n\nIf no argument is given, the constructor creates a new empty list.\nThe argument must be an iterable if specified.",
        methods: &[
            "__getitem__", "__reversed__", "__sizeof__", "append", "clear", "copy", "count",
            "extend", "index", "insert", "pop", "remove", "reverse", "sort",
        ],
        class_methods: &["__class_getitem__"],
        slots: LIST_SLOTS,
        unhashable: true,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "tuple",
        doc: "Built-in immutable sequence.\n\nIf no argument is given, the constructor returns an empty tuple.\nIf iterable is specified the tuple is initialized from iterable's items.\n\nIf the argument is a tuple, the return value is the same object.",
        methods: &["__getnewargs__", "count", "index"],
        class_methods: &["__class_getitem__"],
        slots: TUPLE_SLOTS,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "dict",
        doc: "dict() -> new empty dictionary\ndict(mapping) -> new dictionary initialized from a mapping object's\n    (key, value) pairs\ndict(iterable) -> new dictionary initialized as if via:\n    d = {}\n    for k, v in iterable:\n        d[k] = v\ndict(**kwargs) -> new dictionary initialized with the name=value pairs\n    in the keyword argument list.  For example:  dict(one=1, two=2)",
        methods: &[
            "__contains__", "__getitem__", "__reversed__", "__sizeof__", "clear", "copy", "get",
            "items", "keys", "pop", "popitem", "setdefault", "update", "values",
        ],
        class_methods: &["__class_getitem__", "fromkeys"],
        slots: DICT_SLOTS,
        unhashable: true,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "set",
        doc: "set() -> new empty set object\nset(iterable) -> new set object\n\nBuild an unordered collection of unique elements.",
        methods: &[
            "__contains__", "__reduce__", "__sizeof__", "add", "clear", "copy", "difference",
            "difference_update", "discard", "intersection", "intersection_update",
            "isdisjoint", "issubset", "issuperset", "pop", "remove", "symmetric_difference",
            "symmetric_difference_update", "union", "update",
        ],
        class_methods: &["__class_getitem__"],
        slots: SET_SLOTS,
        unhashable: true,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "frozenset",
        doc: "frozenset() -> empty frozenset object\nfrozenset(iterable) -> frozenset object\n\nBuild an immutable unordered collection of unique elements.",
        methods: SET_COMMON,
        class_methods: &["__class_getitem__"],
        slots: FROZENSET_SLOTS,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "range",
        doc: "range(stop) -> range object\nrange(start, stop[, step]) -> range object\n\nReturn an object that produces a sequence of integers from start (inclusive)\nto stop (exclusive) by step.  range(i, j) produces i, i+1, i+2, ..., j-1.\nstart defaults to 0, and stop is omitted!  range(4) produces 0, 1, 2, 3.\nThese are exactly the valid indices for a list of 4 elements.\nWhen step is given, it specifies the increment (or decrement).",
        methods: &["__reduce__", "__reversed__", "count", "index"],
        slots: RANGE_SLOTS,
        fields: &["start", "step", "stop"],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "slice",
        doc: "slice(stop)\nslice(start, stop[, step])\n\nCreate a slice object.  This is used for extended slicing (e.g. a[0:10:2]).",
        methods: &["__reduce__", "indices"],
        slots: SLICE_SLOTS,
        fields: &["start", "step", "stop"],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "enumerate",
        doc: "Return an enumerate object.\n\n  iterable\n    an object supporting iteration\n\nThe enumerate object yields pairs containing a count (from start, which\ndefaults to zero) and a value yielded by the iterable argument.\n\nenumerate is useful for obtaining an indexed list:\n    (0, seq[0]), (1, seq[1]), (2, seq[2]), ...",
        methods: &["__reduce__"],
        class_methods: &["__class_getitem__"],
        slots: ITERATOR_SLOTS,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "filter",
        doc: "filter(function or None, iterable) --> filter object\n\nReturn an iterator yielding those items of iterable for which function(item)\nis true. If function is None, return the items that are true.",
        methods: &["__reduce__"],
        slots: ITERATOR_SLOTS,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "map",
        doc: "map(func, *iterables) --> map object\n\nMake an iterator that computes the function using arguments from\neach of the iterables.  Stops when the shortest iterable is exhausted.",
        methods: &["__reduce__"],
        slots: ITERATOR_SLOTS,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "zip",
        doc: "zip(*iterables, strict=False) --> Yield tuples until an input is exhausted.\n\n   >>> list(zip('abcdefg', range(3), range(4)))\n   [('a', 0, 0), ('b', 1, 1), ('c', 2, 2)]\n\nThe zip object yields n-length tuples, where n is the number of iterables\npassed as positional arguments to zip().  The i-th element in every tuple\ncomes from the i-th iterable argument to zip().  This continues until the\nshortest argument is exhausted.\n\nIf strict is true and one of the arguments is exhausted before the others,\nraise a ValueError.",
        methods: &["__reduce__", "__setstate__"],
        slots: ITERATOR_SLOTS,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "reversed",
        doc: "Return a reverse iterator over the values of the given sequence.",
        methods: &["__length_hint__", "__reduce__", "__setstate__"],
        slots: ITERATOR_SLOTS,
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "property",
        doc: "Property attribute.\n\n  fget\n    function to be used for getting an attribute value\n  fset\n    function to be used for setting an attribute value\n  fdel\n    function to be used for del'ing an attribute\n  doc\n    docstring for the property attribute\n\nTypical use is to define a managed attribute x:\n\nclass C(object):\n    def getx(self): return self._x\n    def setx(self, value): self._x = value\n    def delx(self): del self._x\n    x = property(getx, setx, delx, \"I'm the 'x' property.\")",
        methods: &["__set_name__", "deleter", "getter", "setter"],
        slots: &["__delete__", "__get__", "__getattribute__", "__init__", "__set__"],
        descriptors: &["__isabstractmethod__"],
        fields: &["fdel", "fget", "fset"],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "classmethod",
        doc: "classmethod(function) -> method\n\nConvert a function to be a class method.\n\nA class method receives the class as implicit first argument,\njust like an instance method receives the instance.\nTo declare a class method, use this idiom:\n\n  class C:\n      @classmethod\n      def f(cls, arg1, arg2, argN):\n          ...",
        slots: &["__get__", "__init__", "__repr__"],
        descriptors: &["__dict__", "__isabstractmethod__"],
        fields: &["__func__", "__wrapped__"],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "staticmethod",
        doc: "staticmethod(function) -> method\n\nConvert a function to be a static method.\n\nA static method does not receive an implicit first argument.\nTo declare a static method, use this idiom:\n\n     class C:\n         @staticmethod\n         def f(arg1, arg2, argN):\n             ...",
        slots: &["__call__", "__get__", "__init__", "__repr__"],
        descriptors: &["__dict__", "__isabstractmethod__"],
        fields: &["__func__", "__wrapped__"],
        ..TypeDef::EMPTY
    },
    TypeDef {
        name: "super",
        doc: "super() -> same as super(__class__, <first argument>)\nsuper(type) -> unbound super object\nsuper(type, obj) -> bound super object; requires isinstance(obj, type)\nsuper(type, type2) -> bound super object; requires issubclass(type2, type)\nTypical use to call a cooperative superclass method:\nclass C(B):\n    def meth(self, arg):\n        super().meth(arg)",
        slots: &["__get__", "__getattribute__", "__init__", "__repr__"],
        fields: &["__self__", "__self_class__", "__thisclass__"],
        ..TypeDef::EMPTY
    },
];
